//! Heuristic scoring of student messages.
//!
//! Scores are keyword and phrase rules over the lowercased text, not a
//! statistical model. Every adjustment is a fixed constant.
//!
//! # Module Structure
//!
//! - `model`: Score types (`ScoreSet`, `ScoreDetails`, `SentimentResult`, `AverageScores`)
//! - `keywords`: The fixed word and phrase lists
//! - `sentiment`: Word-list polarity helper
//! - `scorer`: The `Scorer` itself

mod keywords;
mod model;
mod scorer;
pub mod sentiment;

// Re-export public API
pub use model::{AverageScores, ScoreDetails, ScoreSet, SentimentResult};
pub use scorer::Scorer;

pub(crate) use scorer::word_count;
