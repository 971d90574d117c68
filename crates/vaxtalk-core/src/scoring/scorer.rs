//! Rule-based scoring of student messages.

use super::keywords::{
    ACKNOWLEDGMENT_PHRASES, CLARITY_PHRASES, DISMISSIVE_PHRASES, EMPATHY_KEYWORDS,
    FACT_CATEGORIES, HEDGING_WORDS, JARGON_TERMS, MISINFORMATION_FLAGS, contains_any,
    count_matches,
};
use super::model::{ScoreDetails, ScoreSet, round2};
use super::sentiment;
use once_cell::sync::Lazy;
use regex::Regex;

const BASE_SCORE: f64 = 0.5;

static PERCENTAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\d+ percent").expect("percentage pattern is valid"));

/// Scores a message on empathy, accuracy and clarity.
///
/// The scorer is stateless: identical input always yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores `message`. Blank input yields [`ScoreSet::zero`].
    pub fn score(&self, message: &str) -> ScoreSet {
        if message.trim().is_empty() {
            return ScoreSet::zero();
        }

        let lower = message.to_lowercase();
        let sentiment = sentiment::analyze(message);

        ScoreSet {
            empathy: finish(self.score_empathy(message, &lower, sentiment::raw_compound(message))),
            accuracy: finish(self.score_accuracy(&lower)),
            clarity: finish(self.score_clarity(message, &lower)),
            details: ScoreDetails {
                word_count: word_count(message),
                has_question: message.contains('?'),
                sentiment,
            },
        }
    }

    fn score_empathy(&self, message: &str, lower: &str, compound: f64) -> f64 {
        let mut score = BASE_SCORE;

        let keyword_count = count_matches(lower, EMPATHY_KEYWORDS);
        score += (keyword_count as f64 * 0.1).min(0.3);

        if contains_any(lower, ACKNOWLEDGMENT_PHRASES) {
            score += 0.15;
        }

        if compound > 0.1 {
            score += 0.1;
        } else if compound < -0.1 {
            score -= 0.15;
        }

        if contains_any(lower, DISMISSIVE_PHRASES) {
            score -= 0.1;
        }

        // Questions show engagement, but "why" questions read as challenges.
        if message.contains('?') && !lower.contains("why") {
            score += 0.05;
        }

        score
    }

    fn score_accuracy(&self, lower: &str) -> f64 {
        let mut score = BASE_SCORE;

        let fact_count: usize = FACT_CATEGORIES
            .iter()
            .map(|category| count_matches(lower, category))
            .sum();
        score += (fact_count as f64 * 0.08).min(0.4);

        // Flat penalty, not per occurrence.
        if contains_any(lower, MISINFORMATION_FLAGS) {
            score -= 0.3;
        }

        if PERCENTAGE_PATTERN.is_match(lower) || lower.contains("study") || lower.contains("trial")
        {
            score += 0.15;
        }

        if contains_any(lower, HEDGING_WORDS) {
            score += 0.05;
        }

        score
    }

    fn score_clarity(&self, message: &str, lower: &str) -> f64 {
        let mut score = BASE_SCORE;

        let words = word_count(message);
        if (15..=60).contains(&words) {
            score += 0.2;
        } else if words < 10 {
            score -= 0.2;
        } else if words > 100 {
            score -= 0.15;
        }

        let sentences = sentence_count(message);
        if (1..=4).contains(&sentences) {
            score += 0.15;
        } else if sentences > 6 {
            score -= 0.1;
        }

        if message.contains(['.', '!', '?']) {
            score += 0.1;
        }

        let jargon = count_matches(lower, JARGON_TERMS);
        if jargon > 2 {
            score -= 0.15;
        } else if jargon == 1 {
            score += 0.05;
        }

        if contains_any(lower, CLARITY_PHRASES) {
            score += 0.1;
        }

        score
    }
}

/// Clamps to `[0, 1]` and rounds to two decimals.
fn finish(score: f64) -> f64 {
    round2(score.clamp(0.0, 1.0))
}

pub(crate) fn word_count(message: &str) -> usize {
    message.split_whitespace().count()
}

fn sentence_count(message: &str) -> usize {
    message
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}
