use crate::persona::DEFAULT_PERSONA_KEY;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Which backend generates patient replies.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResponderBackend {
    /// Scripted candidate pools only.
    #[default]
    Pool,
    /// OpenAI-compatible chat completions, degrading to the pool on failure.
    OpenAi,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ResponderConfig {
    pub backend: ResponderBackend,
    pub timeout_secs: u64,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            backend: ResponderBackend::Pool,
            timeout_secs: 10,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            max_tokens: 120,
        }
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// Persona used when none is requested explicitly.
    pub default_persona: String,
    pub responder: ResponderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_persona: DEFAULT_PERSONA_KEY.to_string(),
            responder: ResponderConfig::default(),
        }
    }
}

/// Credentials for the OpenAI-compatible backend, read from `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSecret {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// Root of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAiSecret>,
}

impl SecretConfig {
    /// The OpenAI credentials, if a non-blank key is present.
    pub fn openai_key(&self) -> Option<&OpenAiSecret> {
        self.openai
            .as_ref()
            .filter(|secret| !secret.api_key.trim().is_empty())
    }
}
