//! Snippets command - Browse and copy Laravel code snippets

use anyhow::{Context, Result};
use comfy_table::Cell;
use owo_colors::OwoColorize;

use super::utils;
use crate::laravel::catalog::grouped_matches;
use crate::laravel::snippets::{self, Snippet, SNIPPETS};

/// Width of the code preview column
const PREVIEW_WIDTH: usize = 48;

/// List snippets, optionally filtered by `query`
pub fn list(query: Option<&str>) -> Result<()> {
    println!("{}", render(SNIPPETS, query));
    Ok(())
}

/// Print a snippet, or copy it to the clipboard
pub fn show(title: &str, copy: bool) -> Result<()> {
    let snippet = snippets::find_snippet(title)
        .with_context(|| format!("Unknown snippet: {}", title))?;

    if copy {
        return utils::copy(snippet.code, snippet.title);
    }

    println!("{}", format_snippet(snippet));
    Ok(())
}

/// Render snippets as a table grouped by category
pub fn render(entries: &[Snippet], query: Option<&str>) -> String {
    let mut table = utils::new_table();
    table.set_header(vec!["Category", "Title", "Description", "Code"]);

    let mut shown = 0;
    for (category, members) in grouped_matches(entries, query) {
        for snippet in members {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(snippet.title),
                Cell::new(snippet.description),
                Cell::new(utils::first_line(snippet.code, PREVIEW_WIDTH)),
            ]);
            shown += 1;
        }
    }

    utils::with_footer(table, shown, "snippets", query)
}

/// Header followed by the raw code
pub fn format_snippet(snippet: &Snippet) -> String {
    format!(
        "{} {}\n{}\n\n{}",
        snippet.title.bold(),
        format!("({})", snippet.category).dimmed(),
        snippet.description.dimmed(),
        snippet.code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_filtered() {
        let output = render(SNIPPETS, Some("relationship"));
        assert!(output.contains("HasMany Relationship"));
        assert!(output.contains("BelongsToMany Relationship"));
        assert!(!output.contains("Blade Loop"));
    }

    #[test]
    fn test_format_snippet_contains_code() {
        let snippet = snippets::find_snippet("Eager Loading").unwrap();
        let output = format_snippet(snippet);
        assert!(output.ends_with(snippet.code));
        assert!(output.contains("Eager load relationships"));
    }

    #[test]
    fn test_show_unknown() {
        let err = show("Nope", false).unwrap_err();
        assert_eq!(err.to_string(), "Unknown snippet: Nope");
    }
}
