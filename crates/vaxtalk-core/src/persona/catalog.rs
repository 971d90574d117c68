//! Read-only lookup over the built-in personas.

use super::model::Persona;
use super::preset::{DEFAULT_PERSONA_KEY, get_default_presets};
use std::sync::Arc;

/// Static table of personas, shared by every session.
///
/// The first entry is always the default persona.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Arc<Persona>>,
}

impl PersonaCatalog {
    /// Builds the catalog from the built-in presets.
    pub fn builtin() -> Self {
        let mut personas: Vec<Arc<Persona>> =
            get_default_presets().into_iter().map(Arc::new).collect();
        // Keep the default persona at the front regardless of preset order.
        personas.sort_by_key(|p| p.key != DEFAULT_PERSONA_KEY);
        Self { personas }
    }

    /// Looks up a persona by key without falling back.
    pub fn get(&self, key: &str) -> Option<Arc<Persona>> {
        self.personas.iter().find(|p| p.key == key).cloned()
    }

    /// Looks up a persona by key, silently falling back to the default
    /// persona for unknown keys. Never fails.
    pub fn resolve(&self, key: &str) -> Arc<Persona> {
        self.get(key).unwrap_or_else(|| self.default_persona())
    }

    pub fn default_persona(&self) -> Arc<Persona> {
        Arc::clone(&self.personas[0])
    }

    /// All personas in display order.
    pub fn list(&self) -> &[Arc<Persona>] {
        &self.personas
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
