//! Unified path management for vaxtalk configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/vaxtalk/           # Config directory (platform config dir)
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//! ```

use std::path::PathBuf;
use vaxtalk_core::{Result, VaxtalkError};

const APP_DIR: &str = "vaxtalk";

pub struct VaxtalkPaths;

impl VaxtalkPaths {
    /// Returns the vaxtalk configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/vaxtalk/`)
    /// - `Err(VaxtalkError::Config)`: Could not determine the platform config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| VaxtalkError::config("Cannot find home directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
