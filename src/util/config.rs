// src/util/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

pub const CONFIG_PATH_ENV: &str = "WIKIRAG_CONFIG";
pub const BACKEND_URL_ENV: &str = "WIKIRAG_BACKEND_URL";
const DEFAULT_CONFIG_PATH: &str = "./config.yml";

/// Client settings, read from `config.yml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub export_dir: PathBuf,
    /// Pause between relaying a follow-up question into the input and submitting it
    pub follow_up_delay_ms: u64,
    pub max_input_lines: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 60,
            data_dir: PathBuf::from("./db"),
            log_dir: PathBuf::from("./logs"),
            export_dir: PathBuf::from("./exports"),
            follow_up_delay_ms: 100,
            max_input_lines: 6,
        }
    }
}

impl AppConfig {
    /// Load from `$WIKIRAG_CONFIG` (or `./config.yml`) and apply env overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_path(&path)?;
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }
        Ok(config)
    }

    /// Missing file means defaults; a present but invalid file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::from_path(Path::new("/definitely/not/here.yml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.follow_up_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml(
            "backend_url: http://wiki.lan:9000\nfollow_up_delay_ms: 250\n",
        )
        .unwrap();

        assert_eq!(config.backend_url, "http://wiki.lan:9000");
        assert_eq!(config.follow_up_delay_ms, 250);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("request_timeout_secs: [not, a, number]").is_err());
    }
}
