//! Configuration handling for the waiting-list client

use crate::store::DEFAULT_COLLECTION;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the store base URL
pub const STORE_URL_ENV: &str = "WAITLIST_STORE_URL";
/// Environment variable overriding the store API key
pub const STORE_KEY_ENV: &str = "WAITLIST_STORE_KEY";
/// Environment variable overriding the target collection
pub const COLLECTION_ENV: &str = "WAITLIST_COLLECTION";

/// Store connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Base URL of the subscriber store
    pub store_url: Option<String>,
    /// Anonymous API key for the store
    pub api_key: Option<String>,
    /// Collection (table) signups are inserted into
    pub collection: Option<String>,
}

impl WaitlistConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "borisboarman", "boarman-waitlist")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("boarman-waitlist.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WaitlistConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Overwrite fields with any non-empty values from `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = get(STORE_URL_ENV) {
            self.store_url = Some(url);
        }
        if let Some(key) = get(STORE_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(collection) = get(COLLECTION_ENV) {
            self.collection = Some(collection);
        }
    }

    /// Collection to insert into
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }
}
