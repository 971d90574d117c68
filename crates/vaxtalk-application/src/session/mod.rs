//! Session application services.
//!
//! This module owns the live-session map. Session state itself is defined
//! in `vaxtalk_core::session`.

mod store;

pub use store::{SessionHandle, SessionStore};
