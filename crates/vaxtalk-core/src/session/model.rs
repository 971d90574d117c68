//! Session domain model.
//!
//! A `Session` is one practice conversation between a student and a
//! simulated patient. It is created by the engine, mutated once per student
//! turn, and destroyed when the session ends.

use super::message::Turn;
use crate::persona::Persona;
use crate::scoring::{AverageScores, ScoreSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Openness gain when the student is both empathetic and accurate.
const OPENNESS_GAIN: f64 = 0.15;
/// Openness loss when the student comes across as unempathetic.
const OPENNESS_LOSS: f64 = 0.1;
const GAIN_EMPATHY: f64 = 0.7;
const GAIN_ACCURACY: f64 = 0.6;
const LOSS_EMPATHY: f64 = 0.4;

/// Mutable state of one practice conversation.
///
/// Invariants maintained by the methods below:
/// - `score_history.len() == turn_count`
/// - `history` starts with the persona's initial message, then alternates
///   student/patient
/// - `openness` stays within `[0, 1]`
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    pub persona: Arc<Persona>,
    pub history: Vec<Turn>,
    /// One entry per student turn
    pub score_history: Vec<ScoreSet>,
    pub openness: f64,
    pub turn_count: u32,
    pub start_time: DateTime<Utc>,
    closed: bool,
}

/// Snapshot returned when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub duration_minutes: f64,
    pub turn_count: u32,
    pub final_openness: f64,
    pub average_scores: AverageScores,
    pub persona_name: String,
    pub history: Vec<Turn>,
}

impl Session {
    /// Starts a session: openness from the persona, history seeded with the
    /// persona's initial message.
    pub fn new(id: impl Into<String>, persona: Arc<Persona>) -> Self {
        let history = vec![Turn::patient(persona.initial_message.clone())];
        Self {
            id: id.into(),
            openness: persona.openness.clamp(0.0, 1.0),
            persona,
            history,
            score_history: Vec::new(),
            turn_count: 0,
            start_time: Utc::now(),
            closed: false,
        }
    }

    /// Counts the turn and records the student's message with its scores.
    pub fn record_student_turn(&mut self, message: &str, scores: ScoreSet) {
        self.turn_count += 1;
        self.history.push(Turn::student(message));
        self.score_history.push(scores);
    }

    /// Openness the patient would have after a turn with `scores`.
    ///
    /// Empathy above 0.7 with accuracy above 0.6 raises openness by 0.15;
    /// otherwise empathy below 0.4 lowers it by 0.1.
    pub fn openness_after(&self, scores: &ScoreSet) -> f64 {
        if scores.empathy > GAIN_EMPATHY && scores.accuracy > GAIN_ACCURACY {
            (self.openness + OPENNESS_GAIN).min(1.0)
        } else if scores.empathy < LOSS_EMPATHY {
            (self.openness - OPENNESS_LOSS).max(0.0)
        } else {
            self.openness
        }
    }

    /// Applies the openness rule for one set of scores and returns the new value.
    pub fn adjust_openness(&mut self, scores: &ScoreSet) -> f64 {
        self.openness = self.openness_after(scores);
        self.openness
    }

    pub fn record_patient_turn(&mut self, message: impl Into<String>) {
        self.history.push(Turn::patient(message));
    }

    /// Marks the session as ended. Turns waiting on it must not proceed.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Aggregates the session as of `now`.
    pub fn summary_at(&self, now: DateTime<Utc>) -> SessionSummary {
        let elapsed_ms = (now - self.start_time).num_milliseconds().max(0);
        SessionSummary {
            duration_minutes: elapsed_ms as f64 / 60_000.0,
            turn_count: self.turn_count,
            final_openness: self.openness,
            average_scores: AverageScores::from_history(&self.score_history),
            persona_name: self.persona.name.clone(),
            history: self.history.clone(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaCatalog;
    use crate::session::Speaker;
    use chrono::Duration;

    fn session(key: &str) -> Session {
        Session::new("test-session", PersonaCatalog::builtin().resolve(key))
    }

    fn scores(empathy: f64, accuracy: f64) -> ScoreSet {
        ScoreSet {
            empathy,
            accuracy,
            clarity: 0.5,
            ..ScoreSet::default()
        }
    }

    #[test]
    fn test_new_session_seeds_history() {
        let s = session("safety_concerned");
        assert_eq!(s.openness, 0.3);
        assert_eq!(s.turn_count, 0);
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.history[0].speaker, Speaker::Patient);
        assert_eq!(
            s.history[0].message,
            "I don't think the vaccine has been tested enough. How can we know it's safe in the long run?"
        );
    }

    #[test]
    fn test_openness_gain_is_capped() {
        let mut s = session("side_effects");
        for _ in 0..5 {
            s.adjust_openness(&scores(0.9, 0.9));
        }
        assert_eq!(s.openness, 1.0);
    }

    #[test]
    fn test_openness_loss_is_floored() {
        let mut s = session("misinformation");
        for _ in 0..5 {
            s.adjust_openness(&scores(0.1, 0.9));
        }
        assert_eq!(s.openness, 0.0);
    }

    #[test]
    fn test_openness_unchanged_in_middle_band() {
        let mut s = session("default");
        // empathy high but accuracy too low to gain, and not low enough to lose
        assert_eq!(s.adjust_openness(&scores(0.8, 0.6)), 0.5);
        assert_eq!(s.adjust_openness(&scores(0.4, 0.2)), 0.5);
    }

    #[test]
    fn test_openness_after_does_not_mutate() {
        let s = session("default");
        assert!((s.openness_after(&scores(0.9, 0.9)) - 0.65).abs() < 1e-9);
        assert!((s.openness_after(&scores(0.1, 0.1)) - 0.4).abs() < 1e-9);
        assert_eq!(s.openness, 0.5);
    }

    #[test]
    fn test_record_turns_keeps_invariants() {
        let mut s = session("default");
        for i in 0..3 {
            s.record_student_turn(&format!("message {i}"), ScoreSet::zero());
            s.record_patient_turn("reply");
        }
        assert_eq!(s.turn_count, 3);
        assert_eq!(s.score_history.len(), 3);
        assert_eq!(s.history.len(), 7);
        for (i, turn) in s.history.iter().enumerate() {
            let expected = if i % 2 == 0 { Speaker::Patient } else { Speaker::Student };
            assert_eq!(turn.speaker, expected);
        }
    }

    #[test]
    fn test_summary_duration_and_averages() {
        let mut s = session("natural_immunity");
        s.record_student_turn("a", scores(0.6, 0.4));
        s.record_student_turn("b", scores(0.8, 0.6));
        let summary = s.summary_at(s.start_time + Duration::seconds(90));
        assert!((summary.duration_minutes - 1.5).abs() < 1e-9);
        assert_eq!(summary.turn_count, 2);
        assert_eq!(summary.persona_name, "Michael");
        assert!((summary.average_scores.empathy - 0.7).abs() < 1e-9);
        assert!((summary.average_scores.accuracy - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_close() {
        let mut s = session("default");
        assert!(!s.is_closed());
        s.close();
        assert!(s.is_closed());
    }
}
