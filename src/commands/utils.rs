//! Shared utilities for commands

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::platform;

/// Table with the style used by every list command
pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Append the "N of M" footer used by list commands
pub fn with_footer(table: Table, shown: usize, noun: &str, query: Option<&str>) -> String {
    let mut output = table.to_string();
    match query {
        Some(q) if !q.trim().is_empty() => {
            output.push_str(&format!("\n\n{} {} matching \"{}\"", shown, noun, q.trim()))
        }
        _ => output.push_str(&format!("\n\n{} {}", shown, noun)),
    }
    output
}

/// Copy `text` to the clipboard and report what was copied
pub fn copy(text: &str, what: &str) -> Result<()> {
    platform::copy_to_clipboard(text).with_context(|| format!("Failed to copy {}", what))?;
    println!("{} {}", "Copied:".green(), what);
    Ok(())
}

/// Open `url` in the browser and report it
pub fn open_url(url: &str) -> Result<()> {
    platform::open_url(url).with_context(|| format!("Failed to open {}", url))?;
    println!("{} {}", "Opened:".green(), url);
    Ok(())
}

/// Shorten `text` to its first line, at most `max` characters
pub fn first_line(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > max {
        let mut short: String = line.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("one\ntwo", 10), "one");
        assert_eq!(first_line("", 10), "");
        assert_eq!(first_line("abcdefghij", 10), "abcdefghij");
        assert_eq!(first_line("abcdefghijk", 10), "abcdefghi…");
    }

    #[test]
    fn test_footer() {
        let table = new_table();
        assert!(with_footer(table, 3, "commands", None).ends_with("\n\n3 commands"));

        let table = new_table();
        assert!(with_footer(table, 1, "snippets", Some(" blade ")).ends_with("1 snippets matching \"blade\""));
    }
}
