//! Unified path management for cadastro files.
//!
//! All cadastro configuration and stored records live under the platform's
//! standard config/data directories, resolved via the `dirs` crate.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cadastro/          # Config directory
//! └── config.toml              # Optional store location override
//!
//! ~/.local/share/cadastro/     # Data directory
//! └── store/                   # Record store files
//!     ├── users.json
//!     └── active_user.json
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for cadastro.
pub struct CadastroPaths;

impl CadastroPaths {
    /// Returns the cadastro configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/cadastro/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("cadastro"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the cadastro data directory, used for the record store.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("cadastro"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default directory for the record store files.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}
