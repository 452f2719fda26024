//! Client configuration - service endpoint and request timeout
//!
//! Read from `~/.music-catalog/config.yaml` when present, then overridden by
//! `MUSIC_CATALOG_API_URL` / `MUSIC_CATALOG_TIMEOUT_SECS`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL,
    ENV_TIMEOUT_SECS,
};

/// Where and how the client reaches the music service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_TIMEOUT_SECS).ok(),
        )?;
        Ok(config)
    }

    /// Load from an explicit file. A missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Write the config, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    fn apply_overrides(&mut self, base_url: Option<String>, timeout: Option<String>) -> Result<()> {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = timeout {
            self.timeout_secs = raw.trim().parse().with_context(|| {
                format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS)
            })?;
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://catalog.internal:8080\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://catalog.internal:8080");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = ClientConfig {
            base_url: String::from("https://music.example.com"),
            timeout_secs: 3,
        };
        config.save_to(&path).unwrap();
        assert_eq!(ClientConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "timeout_secs: [not, a, number]\n").unwrap();
        assert!(ClientConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(Some(String::from("http://other:1")), Some(String::from(" 25 ")))
            .unwrap();
        assert_eq!(config.base_url, "http://other:1");
        assert_eq!(config.timeout_secs, 25);

        let mut config = ClientConfig::default();
        config.apply_overrides(Some(String::new()), None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        assert!(config.apply_overrides(None, Some(String::from("soon"))).is_err());
    }
}
