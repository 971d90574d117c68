//! Patient reply generation.
//!
//! The engine asks a [`ResponseProvider`] for the patient's next line once
//! the tier for the turn is known. Three providers live here:
//!
//! - [`PoolResponder`]: picks from the scripted candidates for the tier
//! - [`OpenAiResponder`]: asks an OpenAI-compatible chat completions endpoint
//! - [`FallbackResponder`]: wraps an optional primary provider with a timeout
//!   and degrades to the pool when it fails

pub mod fallback;
pub mod openai_responder;
pub mod pool_responder;
pub mod provider;

pub use fallback::FallbackResponder;
pub use openai_responder::OpenAiResponder;
pub use pool_responder::PoolResponder;
pub use provider::{ReplyRequest, ResponseProvider};
