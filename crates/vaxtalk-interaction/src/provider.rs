//! The reply capability the conversation engine depends on.

use async_trait::async_trait;
use vaxtalk_core::Result;
use vaxtalk_core::persona::Persona;
use vaxtalk_core::response::ResponseTier;
use vaxtalk_core::scoring::ScoreSet;
use vaxtalk_core::session::Turn;

/// Everything a provider may use to produce the patient's next line.
///
/// `history` is the conversation before this turn; the student's new line
/// is `student_message`. `openness`, `turn_count` and `tier` are the values
/// the session takes once the reply is recorded.
#[derive(Debug, Clone, Copy)]
pub struct ReplyRequest<'a> {
    pub persona: &'a Persona,
    pub history: &'a [Turn],
    pub student_message: &'a str,
    pub scores: &'a ScoreSet,
    pub openness: f64,
    pub turn_count: u32,
    pub tier: ResponseTier,
}

/// Produces the patient's reply for a turn.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    async fn generate_reply(&self, request: &ReplyRequest<'_>) -> Result<String>;
}
