//! Configuration management for the subject list TUI.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the API endpoint, team namespace and display preferences.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the XDG config/data dirs.
pub const APP_DIR: &str = "subject-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the subjects API
    pub base_url: String,
    /// Team namespace used in API paths
    pub team: String,
    /// Web front-end root, opened by the navigation buttons (empty disables them)
    pub home_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Width of one terminal cell in logical pixels, used when the terminal
    /// does not report its pixel size
    pub cell_width_px: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://openmind-api.vercel.app".to_string(),
            team: String::new(),
            home_url: String::new(),
            request_timeout_secs: 30,
            cell_width_px: 8,
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/subject-tui/config.jsonc`
    /// 3. `~/.config/subject-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Write a default config file unless one already exists.
    ///
    /// # Returns
    /// * `Result<bool>` - Whether a file was written
    pub fn write_starter(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(Some(path))?;
        Ok(true)
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/subject-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.jsonc"))
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, team: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(team) = team {
            self.team = team;
        }
        self
    }

    /// URL of the web root, or None when navigation is disabled.
    pub fn home_url(&self) -> Option<&str> {
        let url = self.home_url.trim_end_matches('/');
        (!url.is_empty()).then_some(url)
    }
}

/// Strip `//` line comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let bytes = line.as_bytes();
            for i in 0..bytes.len() {
                let b = bytes[i];
                if in_string {
                    match b {
                        _ if escaped => escaped = false,
                        b'\\' => escaped = true,
                        b'"' => in_string = false,
                        _ => {}
                    }
                } else if b == b'"' {
                    in_string = true;
                } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                    return line[..i].trim_end();
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.team.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.cell_width_px, 8);
        assert!(config.home_url().is_none());
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("nope.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            team: "7-3".to_string(),
            home_url: "https://openmind.example/".to_string(),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.team, "7-3");
        assert_eq!(loaded.home_url(), Some("https://openmind.example"));
    }

    #[test]
    fn test_write_starter_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("subject-tui").join("config.jsonc");

        assert!(Config::write_starter(&config_path).unwrap());
        assert_eq!(Config::load(Some(&config_path)).unwrap(), Config::default());

        fs::write(&config_path, r#"{ "team": "3-2" }"#).unwrap();
        assert!(!Config::write_starter(&config_path).unwrap());
        assert_eq!(Config::load(Some(&config_path)).unwrap().team, "3-2");
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // API root
            "base_url": "https://api.example.com/v1", // trailing comment
            "team": "1-1"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.base_url, "https://api.example.com/v1");
        assert_eq!(loaded.team, "1-1");
        assert_eq!(loaded.cell_width_px, 8);
    }

    #[test]
    fn test_strip_comments_respects_escaped_quotes() {
        let line = r#""home_url": "say \"//hi\"" // comment"#;
        assert_eq!(strip_line_comments(line), r#""home_url": "say \"//hi\"""#);
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(None, Some("2-5".to_string()));
        assert_eq!(config.team, "2-5");
        assert_eq!(config.base_url, Config::default().base_url);
    }
}
