//! Shared behaviour of the static reference catalogs
//!
//! Every catalog is a `static` slice defined at build time. Entries are
//! grouped by category for display and filtered by a free-text query.

/// An entry that belongs to a display category
pub trait Categorized {
    fn category(&self) -> &str;
}

/// An entry that can be matched against a search query
pub trait Searchable {
    /// Text fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// True when every whitespace-separated term of `query` appears
    /// (case-insensitively) in at least one field
    fn matches(&self, query: &str) -> bool {
        let fields: Vec<String> = self
            .search_fields()
            .into_iter()
            .map(str::to_lowercase)
            .collect();

        query
            .split_whitespace()
            .map(str::to_lowercase)
            .all(|term| fields.iter().any(|field| field.contains(&term)))
    }
}

/// Group entries by category, keeping categories in first-seen order and
/// entries in catalog order
pub fn group_by_category<T: Categorized>(entries: &[T]) -> Vec<(&str, Vec<&T>)> {
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();

    for entry in entries {
        let category = entry.category();
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(entry),
            None => groups.push((category, vec![entry])),
        }
    }

    groups
}

/// Group the entries matching `query` (all entries when there is none),
/// dropping categories left empty
pub fn grouped_matches<'a, T>(entries: &'a [T], query: Option<&str>) -> Vec<(&'a str, Vec<&'a T>)>
where
    T: Categorized + Searchable,
{
    group_by_category(entries)
        .into_iter()
        .map(|(category, members)| {
            let members: Vec<&T> = members
                .into_iter()
                .filter(|entry| query.map_or(true, |q| entry.matches(q)))
                .collect();
            (category, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}
