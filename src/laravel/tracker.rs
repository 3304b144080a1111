//! Favorites and recently opened documentation pages
//!
//! Both lists hold page identifiers (`DocPage::path`) and are persisted in a
//! [`KeyValueStore`] after every mutation. Identifiers are resolved against
//! the docs catalog when rendered; ids that no longer exist are skipped but
//! left in storage.

use anyhow::{bail, Result};

use super::docs::{self, ResolvedPage};
use super::store::{KeyValueStore, FAVORITES_KEY, RECENT_KEY, SELECTED_VERSION_KEY};
use crate::config::SettingsProvider;

/// Maximum number of favorite pages
pub const MAX_FAVORITES: usize = 20;

/// Maximum number of recent pages
pub const MAX_RECENT: usize = 10;

/// Result of toggling a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
    /// The set is full; nothing changed
    LimitReached,
}

/// Ordered, deduplicated set of favorite ids, at most [`MAX_FAVORITES`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    items: Vec<String>,
}

impl Favorites {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Remove `id` if present, otherwise append it unless the set is full
    pub fn toggle(&mut self, id: &str) -> FavoriteToggle {
        if self.contains(id) {
            self.items.retain(|item| item != id);
            FavoriteToggle::Removed
        } else if self.items.len() >= MAX_FAVORITES {
            FavoriteToggle::LimitReached
        } else {
            self.items.push(id.to_string());
            FavoriteToggle::Added
        }
    }
}

/// Most-recent-first list of ids, at most [`MAX_RECENT`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentList {
    items: Vec<String>,
}

impl RecentList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Move `id` to the front, dropping the oldest entries beyond the limit
    pub fn record(&mut self, id: &str) {
        self.items.retain(|item| item != id);
        self.items.insert(0, id.to_string());
        self.items.truncate(MAX_RECENT);
    }
}

/// Documentation state shared across runs: version, favorites and recents
pub struct Tracker<S: KeyValueStore> {
    store: S,
    version: String,
    favorites: Favorites,
    recent: RecentList,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load state from `store`; a known stored version wins over the configured default
    pub fn load(store: S, settings: &dyn SettingsProvider) -> Result<Self> {
        let version = store
            .get_item(SELECTED_VERSION_KEY)?
            .filter(|v| !v.trim().is_empty())
            .filter(|v| {
                let known = docs::find_version(v).is_some();
                if !known {
                    log::warn!("Ignoring unknown stored {}: {}", SELECTED_VERSION_KEY, v);
                }
                known
            })
            .unwrap_or_else(|| settings.laravel_version());
        let favorites = Favorites::new(read_list(&store, FAVORITES_KEY)?);
        let recent = RecentList::new(read_list(&store, RECENT_KEY)?);

        Ok(Self {
            store,
            version,
            favorites,
            recent,
        })
    }

    /// Active documentation version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Select and persist a documentation version
    pub fn select_version(&mut self, value: &str) -> Result<()> {
        if docs::find_version(value).is_none() {
            bail!("Unknown Laravel version: {}", value);
        }
        self.version = value.to_string();
        self.store.set_item(SELECTED_VERSION_KEY, value)
    }

    pub fn favorites(&self) -> &[String] {
        self.favorites.as_slice()
    }

    pub fn recent(&self) -> &[String] {
        self.recent.as_slice()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle `id` in the favorites set, persisting any change
    pub fn toggle_favorite(&mut self, id: &str) -> Result<FavoriteToggle> {
        let outcome = self.favorites.toggle(id);
        if outcome != FavoriteToggle::LimitReached {
            write_list(&mut self.store, FAVORITES_KEY, self.favorites.as_slice())?;
        }
        Ok(outcome)
    }

    /// Record `id` as the most recently opened page
    pub fn record_recent(&mut self, id: &str) -> Result<()> {
        self.recent.record(id);
        write_list(&mut self.store, RECENT_KEY, self.recent.as_slice())
    }

    /// Look up a stored id in the docs catalog
    pub fn resolve(id: &str) -> Option<ResolvedPage> {
        docs::find_page(id)
    }

    /// Favorite pages still present in the catalog, in favorite order
    pub fn favorite_pages(&self) -> Vec<ResolvedPage> {
        resolve_with(self.favorites.as_slice(), Self::resolve)
    }

    /// Recent pages still present in the catalog, excluding favorites
    pub fn recent_pages(&self) -> Vec<ResolvedPage> {
        let recent: Vec<String> = self
            .recent
            .as_slice()
            .iter()
            .filter(|id| !self.favorites.contains(id))
            .cloned()
            .collect();
        resolve_with(&recent, Self::resolve)
    }
}

/// Resolve ids through `lookup`, silently dropping the ones it cannot find
pub fn resolve_with<T, F>(ids: &[String], lookup: F) -> Vec<T>
where
    F: Fn(&str) -> Option<T>,
{
    ids.iter().filter_map(|id| lookup(id)).collect()
}

fn read_list<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<String>> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            log::warn!("Ignoring unreadable {} value: {}", key, e);
            Ok(Vec::new())
        }
    }
}

fn write_list<S: KeyValueStore>(store: &mut S, key: &str, items: &[String]) -> Result<()> {
    let encoded = serde_json::to_string(items)?;
    store.set_item(key, &encoded)
}
