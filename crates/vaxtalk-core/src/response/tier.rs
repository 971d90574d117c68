//! Mapping from patient openness to a response tier.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Coarse receptiveness of the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpennessBand {
    High,
    Medium,
    Low,
}

/// Bands checked in order; openness strictly above the threshold selects the band.
/// Anything at or below the last threshold is [`OpennessBand::Low`].
const OPENNESS_BANDS: &[(f64, OpennessBand)] =
    &[(0.7, OpennessBand::High), (0.4, OpennessBand::Medium)];

/// Turns after which a persuaded patient may offer to proceed.
const READY_AFTER_TURNS: u32 = 3;

/// Empathy below which a resistant patient turns confrontational.
const CONFRONTATION_EMPATHY: f64 = 0.4;

/// What the student's message is about, for the medium band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediumTopic {
    SideEffects,
    Safety,
    General,
}

/// How a resistant patient reacts, for the low band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LowMood {
    Confrontational,
    Skeptical,
}

/// The candidate pool a patient reply is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "band", rename_all = "snake_case")]
pub enum ResponseTier {
    /// Patient is being persuaded.
    High { ready_to_proceed: bool },
    /// Patient is listening but still has concerns.
    Medium { topic: MediumTopic },
    /// Patient is resistant.
    Low { mood: LowMood },
}

impl OpennessBand {
    pub fn from_openness(openness: f64) -> Self {
        OPENNESS_BANDS
            .iter()
            .find(|(threshold, _)| openness > *threshold)
            .map(|(_, band)| *band)
            .unwrap_or(OpennessBand::Low)
    }
}

impl MediumTopic {
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("side effect") || lower.contains("reaction") {
            MediumTopic::SideEffects
        } else if lower.contains("safe") || lower.contains("tested") {
            MediumTopic::Safety
        } else {
            MediumTopic::General
        }
    }
}

impl LowMood {
    pub fn from_empathy(empathy: f64) -> Self {
        if empathy < CONFRONTATION_EMPATHY {
            LowMood::Confrontational
        } else {
            LowMood::Skeptical
        }
    }
}

impl ResponseTier {
    /// Selects the tier for the current turn.
    ///
    /// `openness` is the value after this turn's update and `turn_count`
    /// already includes this turn.
    pub fn select(openness: f64, turn_count: u32, message: &str, empathy: f64) -> Self {
        match OpennessBand::from_openness(openness) {
            OpennessBand::High => ResponseTier::High {
                ready_to_proceed: turn_count > READY_AFTER_TURNS,
            },
            OpennessBand::Medium => ResponseTier::Medium {
                topic: MediumTopic::from_message(message),
            },
            OpennessBand::Low => ResponseTier::Low {
                mood: LowMood::from_empathy(empathy),
            },
        }
    }

    pub fn band(&self) -> OpennessBand {
        match self {
            ResponseTier::High { .. } => OpennessBand::High,
            ResponseTier::Medium { .. } => OpennessBand::Medium,
            ResponseTier::Low { .. } => OpennessBand::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds_are_strict() {
        assert_eq!(OpennessBand::from_openness(1.0), OpennessBand::High);
        assert_eq!(OpennessBand::from_openness(0.71), OpennessBand::High);
        assert_eq!(OpennessBand::from_openness(0.7), OpennessBand::Medium);
        assert_eq!(OpennessBand::from_openness(0.41), OpennessBand::Medium);
        assert_eq!(OpennessBand::from_openness(0.4), OpennessBand::Low);
        assert_eq!(OpennessBand::from_openness(0.0), OpennessBand::Low);
    }

    #[test]
    fn test_high_tier_ready_after_three_turns() {
        assert_eq!(
            ResponseTier::select(0.8, 3, "", 0.9),
            ResponseTier::High { ready_to_proceed: false }
        );
        assert_eq!(
            ResponseTier::select(0.8, 4, "", 0.9),
            ResponseTier::High { ready_to_proceed: true }
        );
    }

    #[test]
    fn test_medium_topic_branches() {
        assert_eq!(MediumTopic::from_message("Side effects are mild"), MediumTopic::SideEffects);
        assert_eq!(MediumTopic::from_message("A reaction is rare"), MediumTopic::SideEffects);
        assert_eq!(MediumTopic::from_message("It was tested"), MediumTopic::Safety);
        assert_eq!(MediumTopic::from_message("It is SAFE"), MediumTopic::Safety);
        assert_eq!(MediumTopic::from_message("Tell me more"), MediumTopic::General);
        // side effects wins over safety when both appear
        assert_eq!(
            MediumTopic::from_message("Side effects are rare and it is safe"),
            MediumTopic::SideEffects
        );
    }

    #[test]
    fn test_low_mood_branches_on_empathy() {
        assert_eq!(
            ResponseTier::select(0.2, 1, "anything", 0.39),
            ResponseTier::Low { mood: LowMood::Confrontational }
        );
        assert_eq!(
            ResponseTier::select(0.2, 1, "anything", 0.4),
            ResponseTier::Low { mood: LowMood::Skeptical }
        );
    }

    #[test]
    fn test_tier_band_matches_selection() {
        for openness in [0.0, 0.3, 0.4, 0.55, 0.7, 0.85, 1.0] {
            let tier = ResponseTier::select(openness, 2, "is it safe?", 0.5);
            assert_eq!(tier.band(), OpennessBand::from_openness(openness));
        }
    }

    #[test]
    fn test_tier_serializes_with_band_tag() {
        let json = serde_json::to_value(ResponseTier::Medium { topic: MediumTopic::Safety }).unwrap();
        assert_eq!(json["band"], "medium");
        assert_eq!(json["topic"], "safety");
    }
}
