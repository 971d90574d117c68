//! Score types produced by the [`Scorer`](super::Scorer).

use serde::{Deserialize, Serialize};

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Word-list sentiment of a message.
///
/// `neutral` is the floored remainder `1 - positive - negative`; after
/// rounding the three parts need not sum to exactly 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Surface statistics recorded alongside the three scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub word_count: usize,
    pub has_question: bool,
    pub sentiment: SentimentResult,
}

/// Heuristic scores for one student message.
///
/// Each dimension is clamped to `[0, 1]` and rounded to two decimals.
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSet {
    pub empathy: f64,
    pub accuracy: f64,
    pub clarity: f64,
    pub details: ScoreDetails,
}

impl ScoreSet {
    /// All-zero scores with zeroed details; the result for blank input.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Arithmetic mean of the three dimensions.
    pub fn average(&self) -> f64 {
        (self.empathy + self.accuracy + self.clarity) / 3.0
    }
}

/// Per-dimension means over a session (not rounded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageScores {
    pub empathy: f64,
    pub accuracy: f64,
    pub clarity: f64,
}

impl AverageScores {
    /// Means over `history`; all zero when `history` is empty.
    pub fn from_history(history: &[ScoreSet]) -> Self {
        if history.is_empty() {
            return Self::default();
        }

        let n = history.len() as f64;
        let (empathy, accuracy, clarity) = history.iter().fold((0.0, 0.0, 0.0), |acc, s| {
            (acc.0 + s.empathy, acc.1 + s.accuracy, acc.2 + s.clarity)
        });

        Self {
            empathy: empathy / n,
            accuracy: accuracy / n,
            clarity: clarity / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(empathy: f64, accuracy: f64, clarity: f64) -> ScoreSet {
        ScoreSet {
            empathy,
            accuracy,
            clarity,
            ..ScoreSet::default()
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(0.5 + 0.2 + 0.15), 0.85);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_average_scores_empty_history() {
        assert_eq!(AverageScores::from_history(&[]), AverageScores::default());
    }

    #[test]
    fn test_average_scores_mean() {
        let history = vec![scores(0.8, 0.6, 0.4), scores(0.4, 0.6, 0.8), scores(0.6, 0.9, 0.6)];
        let avg = AverageScores::from_history(&history);
        assert!((avg.empathy - 0.6).abs() < 1e-9);
        assert!((avg.accuracy - 0.7).abs() < 1e-9);
        assert!((avg.clarity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_partial_score_object_defaults_to_zero() {
        let parsed: ScoreSet = serde_json::from_str(r#"{"empathy": 0.9}"#).unwrap();
        assert_eq!(parsed.empathy, 0.9);
        assert_eq!(parsed.accuracy, 0.0);
        assert_eq!(parsed.details.word_count, 0);
    }
}
