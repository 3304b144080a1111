//! Paths and user settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Documentation version used when nothing else is configured
pub const DEFAULT_LARAVEL_VERSION: &str = "12.x";

/// Parent directory offered to `new` when no project directory is set
pub const DEFAULT_PARENT_DIR: &str = "~/Projects";

const ENV_PROJECT_DIR: &str = "LARAVEL_HELPER_PROJECT_DIR";
const ENV_VERSION: &str = "LARAVEL_HELPER_VERSION";
const ENV_OPEN_IN_BROWSER: &str = "LARAVEL_HELPER_OPEN_IN_BROWSER";

/// Get the laravel-helper data directory
/// - macOS: ~/Library/Application Support/laravel-helper/
/// - Linux: ~/.config/laravel-helper/
/// - Windows: %APPDATA%/laravel-helper/
pub fn data_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("laravel-helper"))
}

/// Path of the settings file (settings.json)
pub fn settings_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("settings.json"))
}

/// Path of the key-value store (storage.json)
pub fn storage_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("storage.json"))
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Read-only preferences consumed by commands
pub trait SettingsProvider {
    /// Laravel project used by `run`
    fn project_directory(&self) -> Option<PathBuf>;

    /// Default documentation version
    fn laravel_version(&self) -> String;

    /// Whether opening a doc page launches the browser (true) or copies the URL (false)
    fn open_in_browser(&self) -> bool;
}

/// Settings file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub project_directory: Option<PathBuf>,
    pub laravel_version: String,
    pub open_in_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_directory: None,
            laravel_version: DEFAULT_LARAVEL_VERSION.to_string(),
            open_in_browser: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::read(settings_path()?)?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read settings from a file; a missing file yields the defaults
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }

    /// Apply overrides looked up through `lookup` (usually the process environment)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_PROJECT_DIR).filter(|v| !v.trim().is_empty()) {
            self.project_directory = Some(expand_home(dir.trim()));
        }
        if let Some(version) = lookup(ENV_VERSION).filter(|v| !v.trim().is_empty()) {
            self.laravel_version = version.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_OPEN_IN_BROWSER) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.open_in_browser = true,
                "0" | "false" | "no" | "off" => self.open_in_browser = false,
                other => log::warn!("Ignoring {}={}", ENV_OPEN_IN_BROWSER, other),
            }
        }
    }
}

impl SettingsProvider for Settings {
    fn project_directory(&self) -> Option<PathBuf> {
        self.project_directory
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| expand_home(&p.to_string_lossy()))
    }

    fn laravel_version(&self) -> String {
        if self.laravel_version.trim().is_empty() {
            DEFAULT_LARAVEL_VERSION.to_string()
        } else {
            self.laravel_version.clone()
        }
    }

    fn open_in_browser(&self) -> bool {
        self.open_in_browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = data_dir();
        let _ = settings_path();
        let _ = storage_path();
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::read(dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.laravel_version(), "12.x");
        assert!(settings.open_in_browser());
        assert!(settings.project_directory().is_none());
    }

    #[test]
    fn test_partial_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "openInBrowser": false }}"#).unwrap();

        let settings = Settings::read(file.path()).unwrap();
        assert!(!settings.open_in_browser());
        assert_eq!(settings.laravel_version(), DEFAULT_LARAVEL_VERSION);
    }

    #[test]
    fn test_full_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
    "projectDirectory": "/srv/app",
    "laravelVersion": "11.x",
    "openInBrowser": true
}}"#
        )
        .unwrap();

        let settings = Settings::read(file.path()).unwrap();
        assert_eq!(settings.project_directory(), Some(PathBuf::from("/srv/app")));
        assert_eq!(settings.laravel_version(), "11.x");
    }

    #[test]
    fn test_invalid_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Settings::read(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        settings.apply_env(|key| match key {
            ENV_PROJECT_DIR => Some("/tmp/blog".to_string()),
            ENV_VERSION => Some("10.x".to_string()),
            ENV_OPEN_IN_BROWSER => Some("false".to_string()),
            _ => None,
        });

        assert_eq!(settings.project_directory(), Some(PathBuf::from("/tmp/blog")));
        assert_eq!(settings.laravel_version(), "10.x");
        assert!(!settings.open_in_browser());
    }

    #[test]
    fn test_env_blank_values_ignored() {
        let mut settings = Settings::default();
        settings.apply_env(|key| match key {
            ENV_PROJECT_DIR | ENV_VERSION => Some("  ".to_string()),
            ENV_OPEN_IN_BROWSER => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_blank_version_falls_back() {
        let settings = Settings {
            laravel_version: String::new(),
            ..Settings::default()
        };
        assert_eq!(settings.laravel_version(), DEFAULT_LARAVEL_VERSION);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/Projects"), home.join("Projects"));
        }
    }
}
