//! Persona domain model.
//!
//! Represents the simulated patients a student can practise with.
//! Each persona has its own concerns, temperament and starting openness.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A topic the simulated patient is worried about.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Concern {
    SideEffects,
    Safety,
    LongTermEffects,
    Testing,
    NaturalImmunity,
    Necessity,
    Allergies,
    Conspiracy,
    Distrust,
}

/// General temperament of the simulated patient.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Personality {
    Cautious,
    Skeptical,
    Confident,
    Anxious,
    Distrustful,
}

/// A pre-scripted vaccine-hesitant patient profile.
///
/// Personas are immutable once the catalog is built; sessions hold a shared
/// reference to the persona they were started with.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Persona {
    /// Unique catalog key (e.g. `safety_concerned`)
    pub key: String,
    /// Display name of the patient
    pub name: String,
    /// Topics the patient raises
    pub concerns: Vec<Concern>,
    /// Openness at the start of a session, in `[0, 1]`
    pub openness: f64,
    /// First line the patient says
    pub initial_message: String,
    pub personality: Personality,
}

impl Persona {
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }
}
