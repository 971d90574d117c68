//! Secret configuration loading.
//!
//! Credentials come from `~/.config/vaxtalk/secret.json` first, then from
//! the `OPENAI_API_KEY` / `OPENAI_MODEL_NAME` environment variables.

use crate::paths::VaxtalkPaths;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vaxtalk_core::Result;
use vaxtalk_core::config::SecretConfig;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_NAME_ENV: &str = "OPENAI_MODEL_NAME";

/// Resolved OpenAI credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiCredentials {
    pub api_key: String,
    /// Overrides the configured model when present
    pub model_name: Option<String>,
}

/// Read-only storage for `secret.json`.
///
/// # Security Note
///
/// This storage reads plaintext JSON files. The secret.json file should have
/// appropriate file permissions (e.g., 600) to prevent unauthorized access.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a SecretStorage with the default path (`~/.config/vaxtalk/secret.json`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(VaxtalkPaths::secret_file()?))
    }

    /// Creates a SecretStorage with a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the secret configuration; a missing file is an empty config.
    pub fn load(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// OpenAI credentials from the file, falling back to the process environment.
    pub fn openai_credentials(&self) -> Result<Option<OpenAiCredentials>> {
        let secrets = self.load()?;
        Ok(resolve_openai(&secrets, |name| env::var(name).ok()))
    }

    /// Returns the path to the secret file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// File credentials win; otherwise `lookup` is asked for the environment
/// variables. Blank keys count as absent.
pub fn resolve_openai(
    secrets: &SecretConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<OpenAiCredentials> {
    if let Some(openai) = secrets.openai_key() {
        debug!("Using OpenAI credentials from secret.json");
        return Some(OpenAiCredentials {
            api_key: openai.api_key.clone(),
            model_name: openai.model_name.clone(),
        });
    }

    let api_key = lookup(OPENAI_API_KEY_ENV).filter(|key| !key.trim().is_empty())?;
    debug!("Using OpenAI credentials from {}", OPENAI_API_KEY_ENV);
    Some(OpenAiCredentials {
        api_key,
        model_name: lookup(OPENAI_MODEL_NAME_ENV).filter(|name| !name.trim().is_empty()),
    })
}
