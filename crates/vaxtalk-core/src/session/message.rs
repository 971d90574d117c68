//! Conversation turn types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Speaker {
    Student,
    Patient,
}

/// A single message in a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub message: String,
    /// Timestamp when the turn was recorded (RFC 3339).
    pub timestamp: String,
}

impl Turn {
    pub fn new(speaker: Speaker, message: impl Into<String>) -> Self {
        Self {
            speaker,
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn student(message: impl Into<String>) -> Self {
        Self::new(Speaker::Student, message)
    }

    pub fn patient(message: impl Into<String>) -> Self {
        Self::new(Speaker::Patient, message)
    }
}
