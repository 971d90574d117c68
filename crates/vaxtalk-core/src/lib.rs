//! Domain layer for VaxTalk.
//!
//! Everything here is synchronous and free of I/O: the persona catalog,
//! session state, the heuristic scorer, feedback synthesis and the
//! openness-driven response tiers.

pub mod config;
pub mod error;
pub mod feedback;
pub mod persona;
pub mod response;
pub mod scoring;
pub mod session;

// Re-export common error type
pub use error::{Result, VaxtalkError};
