//! Docs command - Browse Laravel documentation with favorites and history

use anyhow::{bail, Context, Result};
use comfy_table::Cell;
use owo_colors::OwoColorize;

use super::utils;
use crate::config::{self, Settings, SettingsProvider};
use crate::laravel::catalog::Searchable;
use crate::laravel::docs::{self, ResolvedPage, LARAVEL_DOCS, VERSIONS};
use crate::laravel::store::{JsonFileStore, KeyValueStore};
use crate::laravel::tracker::{FavoriteToggle, Tracker};

/// Primary action for `docs open`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAction {
    Browser,
    Copy,
}

impl OpenAction {
    /// Pick the action from explicit flags, falling back to the settings
    pub fn resolve(copy: bool, browser: bool, settings: &dyn SettingsProvider) -> Self {
        match (copy, browser) {
            (true, _) => Self::Copy,
            (_, true) => Self::Browser,
            _ if settings.open_in_browser() => Self::Browser,
            _ => Self::Copy,
        }
    }
}

/// Which parts of the list to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Favorites,
    Recent,
}

fn load_tracker(settings: &Settings) -> Result<Tracker<JsonFileStore>> {
    let store = JsonFileStore::open(config::storage_path()?)?;
    Tracker::load(store, settings)
}

fn require_page(path: &str) -> Result<ResolvedPage> {
    docs::find_page(path.trim())
        .with_context(|| format!("Unknown documentation page: {}", path))
}

fn active_version<S: KeyValueStore>(tracker: &Tracker<S>, version: Option<&str>) -> Result<String> {
    match version {
        Some(v) if docs::find_version(v).is_none() => bail!("Unknown Laravel version: {}", v),
        Some(v) => Ok(v.to_string()),
        None => Ok(tracker.version().to_string()),
    }
}

/// Execute `docs list`, `docs favorites` or `docs recent`
pub fn list(listing: Listing, query: Option<&str>, version: Option<&str>) -> Result<()> {
    let settings = Settings::load()?;
    let tracker = load_tracker(&settings)?;
    let version = active_version(&tracker, version)?;
    println!("{}", render(&tracker, listing, &version, query)?);
    Ok(())
}

/// Execute `docs open`
pub fn open(path: &str, version: Option<&str>, copy: bool, browser: bool) -> Result<()> {
    let settings = Settings::load()?;
    let mut tracker = load_tracker(&settings)?;
    let version = active_version(&tracker, version)?;
    let resolved = require_page(path)?;
    let url = docs::doc_url(resolved.page.path, &version)
        .with_context(|| format!("Invalid documentation URL for {}", resolved.page.path))?;

    match OpenAction::resolve(copy, browser, &settings) {
        OpenAction::Browser => utils::open_url(url.as_str())?,
        OpenAction::Copy => utils::copy(url.as_str(), url.as_str())?,
    }

    tracker.record_recent(resolved.page.path)
}

/// Execute `docs favorite`
pub fn favorite(path: &str) -> Result<()> {
    let settings = Settings::load()?;
    let mut tracker = load_tracker(&settings)?;
    let path = path.trim();

    // Stale favorites can still be removed
    if !tracker.is_favorite(path) {
        require_page(path)?;
    }

    match tracker.toggle_favorite(path)? {
        FavoriteToggle::Added => println!("{} {}", "Added to favorites:".green(), path),
        FavoriteToggle::Removed => println!("{} {}", "Removed from favorites:".green(), path),
        FavoriteToggle::LimitReached => {
            eprintln!("{} {}", "Failed:".red(), "Maximum favorites reached")
        }
    }
    Ok(())
}

/// Execute `docs version`
pub fn version(value: Option<&str>) -> Result<()> {
    let settings = Settings::load()?;
    let mut tracker = load_tracker(&settings)?;

    match value {
        Some(value) => {
            tracker.select_version(value.trim())?;
            let title = docs::find_version(tracker.version())
                .map(|v| v.title)
                .unwrap_or_default();
            println!("{} {}", "Selected:".green(), title);
        }
        None => println!("{}", render_versions(tracker.version())),
    }
    Ok(())
}

/// Execute `docs laracasts`
pub fn laracasts(path: &str) -> Result<()> {
    let resolved = require_page(path)?;
    utils::open_url(&docs::laracasts_url(resolved.page.title))
}

/// Render the documentation list for `version`
///
/// Favorites come first, then recent pages that are not favorites, then the
/// full catalog. Stored ids missing from the catalog are skipped.
pub fn render<S: KeyValueStore>(
    tracker: &Tracker<S>,
    listing: Listing,
    version: &str,
    query: Option<&str>,
) -> Result<String> {
    let mut table = utils::new_table();
    table.set_header(vec!["", "Section", "Title", "Path", "URL"]);

    let matches = |r: &ResolvedPage| query.map_or(true, |q| r.matches(q));
    let mut rows: Vec<(String, ResolvedPage)> = Vec::new();

    if listing != Listing::Recent {
        for resolved in tracker.favorite_pages().into_iter().filter(matches) {
            rows.push(("Favorites".to_string(), resolved));
        }
    }
    if listing != Listing::Favorites {
        for resolved in tracker.recent_pages().into_iter().filter(matches) {
            rows.push(("Recent".to_string(), resolved));
        }
    }
    if listing == Listing::All {
        for section in LARAVEL_DOCS {
            for page in section.pages {
                let resolved = ResolvedPage {
                    page,
                    section: section.title,
                };
                if matches(&resolved) {
                    rows.push((section.title.to_string(), resolved));
                }
            }
        }
    }

    for (group, resolved) in &rows {
        let url = docs::doc_url(resolved.page.path, version)
            .with_context(|| format!("Invalid documentation URL for {}", resolved.page.path))?;
        let star = if tracker.is_favorite(resolved.page.path) {
            "★"
        } else {
            ""
        };
        let section = if group == resolved.section {
            group.clone()
        } else {
            format!("{} ({})", group, resolved.section)
        };

        table.add_row(vec![
            Cell::new(star),
            Cell::new(section),
            Cell::new(resolved.page.title),
            Cell::new(resolved.page.path),
            Cell::new(url.as_str()),
        ]);
    }

    let mut output = utils::with_footer(table, rows.len(), "pages", query);
    output.push_str(&format!("\nLaravel {}", version));
    Ok(output)
}

/// Render the version list, marking the active one
pub fn render_versions(active: &str) -> String {
    let mut table = utils::new_table();
    table.set_header(vec!["", "Version", "Title"]);

    for version in VERSIONS {
        let marker = if version.value == active { "✓" } else { "" };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(version.value),
            Cell::new(version.title),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laravel::store::MemoryStore;

    fn tracker() -> Tracker<MemoryStore> {
        Tracker::load(MemoryStore::default(), &Settings::default()).unwrap()
    }

    #[test]
    fn test_open_action() {
        let browser = Settings::default();
        let copy = Settings {
            open_in_browser: false,
            ..Settings::default()
        };

        assert_eq!(OpenAction::resolve(false, false, &browser), OpenAction::Browser);
        assert_eq!(OpenAction::resolve(false, false, &copy), OpenAction::Copy);
        assert_eq!(OpenAction::resolve(true, false, &browser), OpenAction::Copy);
        assert_eq!(OpenAction::resolve(false, true, &copy), OpenAction::Browser);
    }

    #[test]
    fn test_render_all_pages() {
        let output = render(&tracker(), Listing::All, "12.x", None).unwrap();
        let total: usize = LARAVEL_DOCS.iter().map(|s| s.pages.len()).sum();
        assert!(output.contains("https://laravel.com/docs/12.x/installation"));
        assert!(output.contains(&format!("{} pages", total)));
        assert!(output.ends_with("Laravel 12.x"));
    }

    #[test]
    fn test_render_favorites_and_recent() {
        let mut tracker = tracker();
        tracker.toggle_favorite("routing").unwrap();
        tracker.toggle_favorite("stale-page").unwrap();
        tracker.record_recent("blade").unwrap();
        tracker.record_recent("routing").unwrap();

        let favorites = render(&tracker, Listing::Favorites, "11.x", None).unwrap();
        assert!(favorites.contains("https://laravel.com/docs/11.x/routing"));
        assert!(!favorites.contains("stale-page"));
        assert!(favorites.contains("1 pages"));

        let recent = render(&tracker, Listing::Recent, "11.x", None).unwrap();
        assert!(recent.contains("blade"));
        assert!(!recent.contains("/routing"));
        assert!(recent.contains("1 pages"));
    }

    #[test]
    fn test_render_query() {
        let output = render(&tracker(), Listing::All, "12.x", Some("websocket")).unwrap();
        assert!(output.contains("Broadcasting"));
        assert!(output.contains("Reverb"));
        assert!(output.contains("2 pages matching \"websocket\""));
    }

    #[test]
    fn test_render_query_matches_section() {
        let output = render(&tracker(), Listing::All, "12.x", Some("prologue")).unwrap();
        assert!(output.contains("Release Notes"));
        assert!(output.contains("Upgrade Guide"));
        assert!(output.contains("Contribution Guide"));
        assert!(output.contains("3 pages matching \"prologue\""));
    }

    #[test]
    fn test_active_version() {
        let tracker = tracker();
        assert_eq!(active_version(&tracker, None).unwrap(), "12.x");
        assert_eq!(active_version(&tracker, Some("8.x")).unwrap(), "8.x");
        assert!(active_version(&tracker, Some("99.x")).is_err());
    }

    #[test]
    fn test_render_versions_marks_active() {
        let output = render_versions("11.x");
        let marked: Vec<&str> = output.lines().filter(|l| l.contains('✓')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("11.x"));
    }

    #[test]
    fn test_unknown_page() {
        let err = require_page("nope").unwrap_err();
        assert_eq!(err.to_string(), "Unknown documentation page: nope");
    }
}
