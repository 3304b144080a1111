//! Laravel catalogs, persisted docs state, and command execution

pub mod artisan;
pub mod catalog;
pub mod docs;
pub mod runner;
pub mod scaffold;
pub mod snippets;
pub mod store;
pub mod tracker;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use catalog::{group_by_category, Categorized, Searchable};
#[allow(unused_imports)]
pub use store::{JsonFileStore, KeyValueStore};
#[allow(unused_imports)]
pub use tracker::{FavoriteToggle, Tracker};
