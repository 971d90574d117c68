//! Error types for VaxTalk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole VaxTalk workspace.
///
/// `SessionNotFound` is the only error the conversation engine raises at
/// runtime. The remaining variants belong to the outer layers (config
/// loading, the external reply backend) and never escape a turn.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VaxtalkError {
    /// The session id was never issued or the session has already ended
    #[error("Session not found: '{session_id}'")]
    SessionNotFound { session_id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// External reply backend failed
    #[error("Response provider error: {0}")]
    Provider(String),
}

impl VaxtalkError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a SessionNotFound error
    pub fn session_not_found(session_id: impl Into<String>) -> Self {
        Self::SessionNotFound {
            session_id: session_id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a SessionNotFound error
    pub fn is_session_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a provider error
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VaxtalkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VaxtalkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VaxtalkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VaxtalkError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, VaxtalkError>`.
pub type Result<T> = std::result::Result<T, VaxtalkError>;
