//! Configuration management for dom-dojo

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

const APP_NAME: &str = "dom-dojo";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name ("dark" or "light")
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Catalog file to load instead of the built-in lessons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Vim-style navigation keys (j/k/l/b)
    pub vim_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { theme: "dark".to_string(), custom_theme: None, content_path: None, vim_keys: true }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", APP_NAME).context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", APP_NAME).context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(format!("{}.log", APP_NAME)))
    }

    /// Use the named theme for this run. Drops any custom theme so the name wins.
    pub fn override_theme(&mut self, name: impl Into<String>) {
        self.theme = name.into();
        self.custom_theme = None;
    }

    /// Get the active theme. Unknown names fall back to the dark theme.
    pub fn active_theme(&self) -> Theme {
        if let Some(custom) = &self.custom_theme {
            return custom.clone();
        }
        Theme::by_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.theme, "unknown theme, using dark");
            Theme::tokyo_night()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_has_dark_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn default_config_has_vim_keys_enabled() {
        let config = Config::default();
        assert!(config.vim_keys);
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"theme":"light","content_path":"/tmp/lessons.json","vim_keys":false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.active_theme().name, "Tokyo Night Day");
        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/lessons.json")));
        assert!(!config.vim_keys);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let config = Config { theme: "solarized".into(), ..Default::default() };
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn custom_theme_wins() {
        let custom = Theme { name: "Mine".into(), ..Theme::tokyo_night_day() };
        let config = Config { custom_theme: Some(custom), ..Default::default() };
        assert_eq!(config.active_theme().name, "Mine");
    }

    #[test]
    fn theme_override_beats_custom_theme() {
        let custom = Theme { name: "Mine".into(), ..Theme::tokyo_night() };
        let mut config = Config { custom_theme: Some(custom), ..Default::default() };
        config.override_theme("light");
        assert_eq!(config.theme, "light");
        assert_eq!(config.custom_theme, None);
        assert_eq!(config.active_theme().name, "Tokyo Night Day");
    }

    #[test]
    fn load_from_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let saved = Config { theme: "light".into(), ..Default::default() };
        saved.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), saved);
    }
}
