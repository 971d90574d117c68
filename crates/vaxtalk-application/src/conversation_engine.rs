//! Conversation engine.
//!
//! This module provides the `ConversationEngine`, which ties the persona
//! catalog, the session store, the scorer, the feedback synthesizer and the
//! reply provider together into the three practice operations: starting a
//! session, submitting a student turn and ending a session.

use crate::session::{SessionHandle, SessionStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use vaxtalk_core::feedback::{Feedback, FeedbackSynthesizer};
use vaxtalk_core::persona::{Persona, PersonaCatalog};
use vaxtalk_core::response::ResponseTier;
use vaxtalk_core::scoring::{ScoreSet, Scorer};
use vaxtalk_core::session::{Session, SessionSummary};
use vaxtalk_core::{Result, VaxtalkError};
use vaxtalk_interaction::{FallbackResponder, ReplyRequest, ResponseProvider};

/// Result of starting a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    /// The persona's opening line
    pub patient_message: String,
    /// The key as requested, even when it fell back to the default persona
    pub persona_key: String,
}

/// Result of one student turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub patient_message: String,
    pub scores: ScoreSet,
    pub feedback: Feedback,
    /// Openness after this turn's update
    pub openness: f64,
    pub tier: ResponseTier,
}

/// Orchestrates practice sessions.
///
/// # Thread Safety
///
/// The engine is `Send + Sync` and meant to be shared behind an `Arc`.
/// Turns on one session are serialized by that session's lock, which is
/// held across the reply provider call so no partial turn is ever visible.
pub struct ConversationEngine {
    catalog: PersonaCatalog,
    store: SessionStore,
    scorer: Scorer,
    feedback: FeedbackSynthesizer,
    responder: Arc<dyn ResponseProvider>,
}

impl ConversationEngine {
    /// Creates an engine over the built-in personas and an empty store.
    ///
    /// Production callers pass a [`FallbackResponder`], which never fails.
    pub fn new(responder: impl ResponseProvider + 'static) -> Self {
        Self::with_store(responder, SessionStore::new())
    }

    pub fn with_store(responder: impl ResponseProvider + 'static, store: SessionStore) -> Self {
        Self {
            catalog: PersonaCatalog::builtin(),
            store,
            scorer: Scorer::new(),
            feedback: FeedbackSynthesizer::new(),
            responder: Arc::new(responder),
        }
    }

    /// Personas available for practice, default first.
    pub fn personas(&self) -> &[Arc<Persona>] {
        self.catalog.list()
    }

    /// Starts a session with the persona for `persona_key`.
    ///
    /// Unknown keys fall back to the default persona; this never fails.
    pub async fn start_session(&self, persona_key: &str) -> StartSessionResponse {
        if self.catalog.get(persona_key).is_none() {
            debug!("Unknown persona '{}', using default persona", persona_key);
        }
        let persona = self.catalog.resolve(persona_key);
        let session_id = Uuid::new_v4().to_string();
        let session = Session::new(session_id.clone(), persona);
        let patient_message = session.persona.initial_message.clone();

        info!(
            "Started session {} with persona {} (openness {:.2})",
            session_id, session.persona.key, session.openness
        );
        self.store.insert(session).await;

        StartSessionResponse {
            session_id,
            patient_message,
            persona_key: persona_key.to_string(),
        }
    }

    /// Scores the student's message, moves the patient's openness and
    /// produces the patient's reply with feedback.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if the id is unknown or the session ended while
    /// this turn was waiting for it. A provider error is returned as is and
    /// leaves the session exactly as it was before the call.
    pub async fn submit_turn(&self, session_id: &str, student_message: &str) -> Result<TurnResult> {
        let handle = self.handle(session_id).await?;
        let mut session = handle.lock().await;
        if session.is_closed() {
            return Err(VaxtalkError::session_not_found(session_id));
        }

        // Nothing is written to the session until the reply is in hand.
        let scores = self.scorer.score(student_message);
        let openness = session.openness_after(&scores);
        let turn_count = session.turn_count + 1;
        let tier = ResponseTier::select(openness, turn_count, student_message, scores.empathy);

        debug!(
            "Session {} turn {}: empathy={:.2} accuracy={:.2} clarity={:.2} openness={:.2} band={} tier={:?}",
            session_id,
            turn_count,
            scores.empathy,
            scores.accuracy,
            scores.clarity,
            openness,
            tier.band(),
            tier
        );

        let patient_message = {
            let request = ReplyRequest {
                persona: &session.persona,
                history: &session.history,
                student_message,
                scores: &scores,
                openness,
                turn_count,
                tier,
            };
            self.responder.generate_reply(&request).await?
        };

        session.record_student_turn(student_message, scores);
        session.adjust_openness(&scores);
        session.record_patient_turn(patient_message.clone());

        Ok(TurnResult {
            patient_message,
            scores,
            feedback: self.feedback.generate(student_message, &scores),
            openness,
            tier,
        })
    }

    /// Ends a session and returns its summary. The id is invalid afterwards.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if the id is unknown or already ended.
    pub async fn end_session(&self, session_id: &str) -> Result<SessionSummary> {
        let handle = self.handle(session_id).await?;
        let mut session = handle.lock().await;
        if session.is_closed() {
            return Err(VaxtalkError::session_not_found(session_id));
        }

        self.store.remove(session_id).await;
        session.close();
        let summary = session.summary();

        info!(
            "Ended session {} after {} turns (final openness {:.2})",
            session_id, summary.turn_count, summary.final_openness
        );
        Ok(summary)
    }

    /// Read-only copy of a live session.
    pub async fn session_snapshot(&self, session_id: &str) -> Result<Session> {
        let handle = self.handle(session_id).await?;
        let session = handle.lock().await;
        if session.is_closed() {
            return Err(VaxtalkError::session_not_found(session_id));
        }
        Ok(session.clone())
    }

    pub async fn active_sessions(&self) -> usize {
        self.store.len().await
    }

    async fn handle(&self, session_id: &str) -> Result<SessionHandle> {
        self.store
            .get(session_id)
            .await
            .ok_or_else(|| VaxtalkError::session_not_found(session_id))
    }
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new(FallbackResponder::default())
    }
}
