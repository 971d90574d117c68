//! Application layer for VaxTalk.
//!
//! This crate provides the use case that coordinates the domain layer
//! (`vaxtalk-core`) with reply providers (`vaxtalk-interaction`).

pub mod conversation_engine;
pub mod session;

pub use conversation_engine::{ConversationEngine, StartSessionResponse, TurnResult};
pub use session::SessionStore;
