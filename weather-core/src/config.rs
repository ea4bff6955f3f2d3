use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::provider::dashboard::DashboardApiProvider;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const DEFAULT_SHORTCUTS: [&str; 4] = ["London", "New York", "Tokyo", "São Paulo"];

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "http://localhost:5000"
/// shortcuts = ["London", "Tokyo"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Origin of the dashboard backend. Falls back to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,

    /// Pre-set cities. Falls back to [`DEFAULT_SHORTCUTS`] when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortcuts: Vec<String>,
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Store a new backend origin after checking it can be used as one.
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        DashboardApiProvider::new(url)?;
        self.base_url = Some(url.to_string());
        Ok(())
    }

    pub fn shortcuts(&self) -> Vec<String> {
        if self.shortcuts.is_empty() {
            DEFAULT_SHORTCUTS.iter().map(|s| s.to_string()).collect()
        } else {
            self.shortcuts.clone()
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Like [`Config::load`], but an unreadable or corrupt file yields the
    /// defaults so it can be overwritten.
    pub fn load_or_default() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %format!("{e:#}"), "Ignoring unusable config file");
            Self::default()
        })
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.shortcuts(), vec!["London", "New York", "Tokyo", "São Paulo"]);
    }

    #[test]
    fn set_base_url_stores_trimmed_value() {
        let mut cfg = Config::default();

        cfg.set_base_url("  https://weather.example.com  ").expect("url should be accepted");

        assert_eq!(cfg.base_url(), "https://weather.example.com");
    }

    #[test]
    fn set_base_url_rejects_invalid_and_keeps_previous() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://10.0.0.2:5000").unwrap();

        let err = cfg.set_base_url("file:///etc/passwd").unwrap_err();

        assert!(err.to_string().contains("Invalid backend URL"));
        assert_eq!(cfg.base_url(), "http://10.0.0.2:5000");
    }

    #[test]
    fn parses_toml_with_shortcuts() {
        let cfg = Config::from_toml(
            r#"
            base_url = "http://127.0.0.1:8080"
            shortcuts = ["Porto", "Recife"]
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.base_url(), "http://127.0.0.1:8080");
        assert_eq!(cfg.shortcuts(), vec!["Porto", "Recife"]);
    }

    #[test]
    fn empty_toml_is_default_config() {
        let cfg = Config::from_toml("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn toml_roundtrip_omits_empty_shortcuts() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://localhost:9000").unwrap();

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(!text.contains("shortcuts"));
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn corrupt_file_fails_strict_load_but_not_lenient_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        assert_eq!(Config::load_or_default_from(&path), Config::default());
    }

    #[test]
    fn load_from_reads_saved_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"http://127.0.0.1:8080\"\n").unwrap();

        assert_eq!(Config::load_or_default_from(&path).base_url(), "http://127.0.0.1:8080");
    }
}
