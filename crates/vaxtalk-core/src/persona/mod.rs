//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: Persona domain model (`Persona`, `Concern`, `Personality`)
//! - `preset`: The built-in patients
//! - `catalog`: Lookup with default fallback (`PersonaCatalog`)
//!
//! # Usage
//!
//! ```ignore
//! use vaxtalk_core::persona::{Persona, PersonaCatalog};
//! ```

mod catalog;
mod model;
mod preset;

// Re-export public API
pub use catalog::PersonaCatalog;
pub use model::{Concern, Persona, Personality};
pub use preset::{DEFAULT_PERSONA_KEY, get_default_presets};
