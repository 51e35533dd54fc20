//! Configuration service implementation.
//!
//! Loads the engine configuration from the configuration file
//! (~/.config/profilecraft/config.toml). Every field is optional in the
//! file; a missing file yields the defaults.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use profilecraft_core::template::Template;
use profilecraft_core::{CraftError, Result};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CraftConfig {
    /// Simulated persistence latency for saves, in milliseconds.
    pub save_delay_ms: u64,
    /// Simulated fetch latency for the demo repository, in milliseconds.
    pub load_delay_ms: u64,
    /// Template used when a username resolves to none.
    pub default_template: Template,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: 500,
            load_delay_ms: 500,
            default_template: Template::Modern,
        }
    }
}

impl CraftConfig {
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Configuration service that loads and caches the engine configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<CraftConfig>>>,
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a service reading from the default user config location.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Creates a service reading from an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Some(path.into()),
        }
    }

    /// Gets the configuration, loading from file on first access.
    ///
    /// Falls back to defaults when the file is missing or unreadable.
    pub fn get_config(&self) -> CraftConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<CraftConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_config_path()?,
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CraftConfig::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| CraftError::config("could not determine user config directory"))?;
        Ok(base.join("profilecraft").join("config.toml"))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));

        let config = service.get_config();
        assert_eq!(config, CraftConfig::default());
        assert_eq!(config.save_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "saveDelayMs = 50").unwrap();

        let config = ConfigService::with_path(&path).get_config();
        assert_eq!(config.save_delay_ms, 50);
        assert_eq!(config.load_delay_ms, 500);
        assert_eq!(config.default_template, Template::Modern);
    }

    #[test]
    fn test_template_field_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "defaultTemplate = \"creative\"\n").unwrap();

        let config = ConfigService::with_path(&path).get_config();
        assert_eq!(config.default_template, Template::Creative);
    }

    #[test]
    fn test_cache_and_invalidate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "saveDelayMs = 10\n").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().save_delay_ms, 10);

        std::fs::write(&path, "saveDelayMs = 20\n").unwrap();
        assert_eq!(service.get_config().save_delay_ms, 10);

        service.invalidate_cache();
        assert_eq!(service.get_config().save_delay_ms, 20);
    }
}
