//! Feedback types returned to the student after each turn.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Coarse rating of a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Level {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    #[strum(serialize = "Needs Improvement")]
    NeedsImprovement,
}

impl Level {
    /// Excellent (≥0.8), Good (≥0.65), Fair (≥0.5), otherwise Needs Improvement.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Level::Excellent
        } else if score >= 0.65 {
            Level::Good
        } else if score >= 0.5 {
            Level::Fair
        } else {
            Level::NeedsImprovement
        }
    }
}

/// Feedback for one scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionFeedback {
    pub score: f64,
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SuggestionCategory {
    Empathy,
    Accuracy,
    Clarity,
    Engagement,
}

/// An actionable tip with a sample phrasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub tip: String,
    pub example: String,
}

/// Everything the student sees about one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub overall: String,
    pub empathy: DimensionFeedback,
    pub accuracy: DimensionFeedback,
    pub clarity: DimensionFeedback,
    /// At most three, in check order.
    pub suggestions: Vec<Suggestion>,
    /// Never empty.
    pub strengths: Vec<String>,
}
