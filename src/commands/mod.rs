//! CLI commands

pub mod artisan;
pub mod docs;
pub mod new;
pub mod run;
pub mod settings;
pub mod snippets;
pub mod utils;
