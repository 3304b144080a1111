//! Settings command - Show resolved paths and effective settings

use anyhow::Result;

use crate::config::{self, Settings, SettingsProvider};

/// Execute the settings command
pub fn execute() -> Result<()> {
    let settings = Settings::load()?;
    println!("{}", format_settings(&settings)?);
    Ok(())
}

/// Format paths and settings for display
pub fn format_settings(settings: &dyn SettingsProvider) -> Result<String> {
    let mut lines = vec![];

    lines.push(format!("Settings file: {}", config::settings_path()?.display()));
    lines.push(format!("Storage file: {}", config::storage_path()?.display()));

    lines.push(String::new()); // blank line

    match settings.project_directory() {
        Some(dir) => lines.push(format!("Project directory: {}", dir.display())),
        None => lines.push("Project directory: (not set)".to_string()),
    }
    lines.push(format!("Laravel version: {}", settings.laravel_version()));
    lines.push(format!(
        "Open docs in: {}",
        if settings.open_in_browser() {
            "browser"
        } else {
            "clipboard"
        }
    ));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_settings_defaults() {
        let output = format_settings(&Settings::default()).unwrap();
        assert!(output.contains("Project directory: (not set)"));
        assert!(output.contains("Laravel version: 12.x"));
        assert!(output.contains("Open docs in: browser"));
    }
}
