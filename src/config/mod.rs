//! Application configuration
//!
//! Loaded from `~/.batyrbol/config.toml`. Every field has a default so a
//! missing or partial file still yields a working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::Language;
use crate::mission::RewardPolicy;

/// Default request timeout for the scenario backend, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the scenario generation backend. None plays fully offline.
    pub endpoint: Option<String>,
    /// Timeout for one generation request, in seconds.
    pub request_timeout_secs: u64,
    /// Interface language for scenarios and titles.
    pub language: Language,
    /// How finished missions are scored.
    pub reward_policy: RewardPolicy,
    /// Difficulty level 1-4 used when `play` is run without `--difficulty`.
    pub difficulty: u8,
    /// Override for the profile database location.
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: Language::default(),
            reward_policy: RewardPolicy::default(),
            difficulty: 1,
            db_path: None,
        }
    }
}

impl Config {
    /// Get the data directory path (~/.batyrbol/)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".batyrbol")
    }

    /// Get the config file path (~/.batyrbol/config.toml)
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file (temp file + rename, never a torn write).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write config file: {}", temp_path.display()))?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        Ok(())
    }

    /// Load the global configuration, creating a default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to_file(&path)?;
            return Ok(config);
        }
        Self::from_file(&path)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Profile database path, honoring the override.
    pub fn profile_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("profile.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.difficulty, 1);
        assert_eq!(config.language, Language::Kazakh);
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(r#"language = "ru""#).unwrap();
        assert_eq!(config.language, Language::Russian);
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.reward_policy, RewardPolicy::Stars);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.endpoint = Some("http://localhost:3001".to_string());
        config.reward_policy = RewardPolicy::Tempo;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.endpoint.as_deref(), Some("http://localhost:3001"));
        assert_eq!(loaded.reward_policy, RewardPolicy::Tempo);
    }
}
