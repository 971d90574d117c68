//! Feedback synthesis.
//!
//! Maps a message and its [`ScoreSet`](crate::scoring::ScoreSet) to an overall
//! verdict, per-dimension levels, at most three suggestions and a non-empty
//! list of strengths.

mod generator;
mod model;

pub use generator::FeedbackSynthesizer;
pub use model::{DimensionFeedback, Feedback, Level, Suggestion, SuggestionCategory};
