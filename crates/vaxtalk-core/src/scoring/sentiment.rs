//! Word-list sentiment analysis.

use super::keywords::{NEGATIVE_WORDS, POSITIVE_WORDS};
use super::model::{SentimentResult, round2};

/// Splits on whitespace, keeps only alphabetic characters of each token,
/// lowercases, and drops tokens left empty (e.g. bare numbers).
fn tokenize(message: &str) -> Vec<String> {
    message
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Word-list hits for one message.
struct Polarity {
    positive: usize,
    negative: usize,
    total: usize,
}

impl Polarity {
    fn of(message: &str) -> Self {
        let tokens = tokenize(message);
        Self {
            positive: tokens
                .iter()
                .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
                .count(),
            negative: tokens
                .iter()
                .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
                .count(),
            total: tokens.len(),
        }
    }

    fn compound(&self) -> f64 {
        (self.positive as f64 - self.negative as f64) / (self.total as f64).max(1.0)
    }
}

/// Unrounded compound polarity; the empathy tone check compares this value.
pub(crate) fn raw_compound(message: &str) -> f64 {
    Polarity::of(message).compound()
}

/// Scores the polarity of `message` against the fixed word lists.
///
/// Returns all zeros when the message has no word tokens.
pub fn analyze(message: &str) -> SentimentResult {
    let polarity = Polarity::of(message);
    if polarity.total == 0 {
        return SentimentResult::default();
    }

    let total = polarity.total as f64;
    let positive = polarity.positive as f64 / total;
    let negative = polarity.negative as f64 / total;
    let neutral = (1.0 - positive - negative).max(0.0);

    SentimentResult {
        compound: round2(polarity.compound()),
        positive: round2(positive),
        negative: round2(negative),
        neutral: round2(neutral),
    }
}
