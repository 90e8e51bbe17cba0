use crate::error::{QuotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;
const DEFAULT_CATEGORY: &str = "Server";

/// Configuration for quotz, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotzConfig {
    /// Remote endpoint for sync (GET fetches, POST pushes)
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    /// Seconds between periodic reconciliation cycles in watch mode
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,

    /// Category assigned to remote records whose body carries no token
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_sync_interval() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for QuotzConfig {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            sync_interval_secs: default_sync_interval(),
            default_category: default_category(),
        }
    }
}

impl QuotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuotzError::Io)?;
        let config: QuotzConfig =
            serde_json::from_str(&content).map_err(QuotzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuotzError::Serialization)?;
        fs::write(config_path, content).map_err(QuotzError::Io)?;
        Ok(())
    }

    /// Set a key by its CLI name. Unknown keys and unparsable values are
    /// validation errors.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "remote-url" => self.remote_url = value.to_string(),
            "sync-interval" => {
                self.sync_interval_secs = value.parse().map_err(|_| {
                    QuotzError::Validation(format!("not a number of seconds: {}", value))
                })?;
            }
            "default-category" => self.default_category = value.to_string(),
            other => {
                return Err(QuotzError::Validation(format!(
                    "unknown config key: {}",
                    other
                )));
            }
        }
        Ok(())
    }

    /// Read a key by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "remote-url" => Ok(self.remote_url.clone()),
            "sync-interval" => Ok(self.sync_interval_secs.to_string()),
            "default-category" => Ok(self.default_category.clone()),
            other => Err(QuotzError::Validation(format!(
                "unknown config key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuotzConfig::default();
        assert_eq!(config.sync_interval_secs, 30);
        assert_eq!(config.default_category, "Server");
        assert!(config.remote_url.starts_with("https://"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuotzConfig::load(dir.path()).unwrap();
        assert_eq!(config, QuotzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = QuotzConfig::default();
        config.set("remote-url", "http://localhost:9999/quotes").unwrap();
        config.set("sync-interval", "5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = QuotzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.remote_url, "http://localhost:9999/quotes");
        assert_eq!(loaded.sync_interval_secs, 5);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = QuotzConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
    }

    #[test]
    fn test_set_rejects_bad_interval() {
        let mut config = QuotzConfig::default();
        assert!(config.set("sync-interval", "soon").is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"sync_interval_secs": 120}"#,
        )
        .unwrap();

        let config = QuotzConfig::load(dir.path()).unwrap();
        assert_eq!(config.sync_interval_secs, 120);
        assert_eq!(config.default_category, "Server");
    }
}
