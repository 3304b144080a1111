//! laravel-helper library
//!
//! Static Laravel reference catalogs (Artisan commands, documentation pages,
//! snippets), a persisted favorites/recent pages tracker, and helpers that run
//! Artisan or the Laravel installer through the system shell.

pub mod config;
pub mod laravel;
pub mod platform;
