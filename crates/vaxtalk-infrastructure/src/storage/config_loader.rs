//! Loading of `config.toml`.

use crate::paths::VaxtalkPaths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vaxtalk_core::Result;
use vaxtalk_core::config::AppConfig;

/// Reads [`AppConfig`] from a TOML file.
///
/// A missing or empty file is not an error and yields the defaults, so the
/// CLI works without any setup.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Loader for the default location (`~/.config/vaxtalk/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(VaxtalkPaths::config_file()?))
    }

    /// Loader for a custom path (for `--config` and tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config from the default location.
    pub fn load() -> Result<AppConfig> {
        Self::new()?.read()
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        Self::with_path(path.as_ref()).read()
    }

    /// Reads and parses the file.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: parsed config, or defaults if the file is missing or empty
    /// - `Err(VaxtalkError::Io)`: the file exists but could not be read
    /// - `Err(VaxtalkError::Serialization)`: the file is not valid TOML for `AppConfig`
    pub fn read(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }

    /// Renders a config the way it would be written to disk.
    pub fn render(config: &AppConfig) -> Result<String> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vaxtalk_core::config::ResponderBackend;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(loader.path(), temp_dir.path().join("config.toml"));
        assert_eq!(loader.read().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_render_parses_back() {
        let mut config = AppConfig::default();
        config.responder.backend = ResponderBackend::OpenAi;
        let rendered = ConfigLoader::render(&config).unwrap();
        assert!(rendered.contains("backend = \"openai\""));
        assert_eq!(toml::from_str::<AppConfig>(&rendered).unwrap(), config);
    }
}
