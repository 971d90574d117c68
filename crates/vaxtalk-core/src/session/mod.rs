//! Session domain module.
//!
//! This module contains the session state and conversation turn types.
//! Lifecycle management (creation, lookup, teardown) lives in the
//! application layer's session store.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `SessionSummary`)
//! - `message`: Conversation turn types (`Speaker`, `Turn`)
//!
//! # Usage
//!
//! ```ignore
//! use vaxtalk_core::session::{Session, SessionSummary, Speaker, Turn};
//! ```

mod message;
mod model;

// Re-export public API
pub use message::{Speaker, Turn};
pub use model::{Session, SessionSummary};
