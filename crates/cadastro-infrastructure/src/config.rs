//! Application configuration.
//!
//! A small optional `config.toml` lets an installation relocate the record
//! store. Missing or unreadable configuration falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::paths::CadastroPaths;

/// Configuration for the record store location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Overrides the default store directory when set.
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Loads the configuration from the standard config file.
    ///
    /// Missing or unreadable files yield the default configuration.
    pub fn load() -> Self {
        match CadastroPaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config, using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// The store directory this configuration resolves to.
    pub fn resolved_store_dir(&self) -> Result<PathBuf, crate::paths::PathError> {
        match &self.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => CadastroPaths::store_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::load_from(&temp_dir.path().join("config.toml"));
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_store_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "store_dir = \"/tmp/cadastro-store\"\n").unwrap();

        let config = StoreConfig::load_from(&path);
        assert_eq!(
            config.store_dir.as_deref(),
            Some(Path::new("/tmp/cadastro-store"))
        );
        assert_eq!(
            config.resolved_store_dir().unwrap(),
            PathBuf::from("/tmp/cadastro-store")
        );
    }

    #[test]
    fn test_corrupt_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "store_dir = [not toml").unwrap();

        let config = StoreConfig::load_from(&path);
        assert!(config.store_dir.is_none());
    }
}
