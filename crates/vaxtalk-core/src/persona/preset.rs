//! Built-in persona presets.
//!
//! Five canonical patients ship with the simulator. The catalog is static;
//! there is no way to register personas at runtime.

use super::model::{Concern, Persona, Personality};

/// Key of the persona used when a requested key is unknown.
pub const DEFAULT_PERSONA_KEY: &str = "default";

/// Returns the built-in personas in display order.
///
/// - **Alex** (`default`): cautious, worried about side effects
/// - **Sarah** (`safety_concerned`): skeptical about testing and long-term safety
/// - **Michael** (`natural_immunity`): confident in natural immunity
/// - **Jennifer** (`side_effects`): anxious, has allergies
/// - **Robert** (`misinformation`): distrustful, repeats online claims
pub fn get_default_presets() -> Vec<Persona> {
    vec![
        Persona {
            key: DEFAULT_PERSONA_KEY.to_string(),
            name: "Alex".to_string(),
            concerns: vec![Concern::SideEffects, Concern::Safety],
            openness: 0.5,
            initial_message: "I'm not sure about getting this vaccine. I've heard a lot of concerning things about side effects.".to_string(),
            personality: Personality::Cautious,
        },
        Persona {
            key: "safety_concerned".to_string(),
            name: "Sarah".to_string(),
            concerns: vec![Concern::LongTermEffects, Concern::Testing],
            openness: 0.3,
            initial_message: "I don't think the vaccine has been tested enough. How can we know it's safe in the long run?".to_string(),
            personality: Personality::Skeptical,
        },
        Persona {
            key: "natural_immunity".to_string(),
            name: "Michael".to_string(),
            concerns: vec![Concern::NaturalImmunity, Concern::Necessity],
            openness: 0.4,
            initial_message: "I'd rather rely on my natural immunity. Why do I need a vaccine if my immune system works fine?".to_string(),
            personality: Personality::Confident,
        },
        Persona {
            key: "side_effects".to_string(),
            name: "Jennifer".to_string(),
            concerns: vec![Concern::SideEffects, Concern::Allergies],
            openness: 0.6,
            initial_message: "I'm worried about side effects. I have some allergies, and I've heard people have had bad reactions.".to_string(),
            personality: Personality::Anxious,
        },
        Persona {
            key: "misinformation".to_string(),
            name: "Robert".to_string(),
            concerns: vec![Concern::Conspiracy, Concern::Distrust],
            openness: 0.2,
            initial_message: "I've read online that vaccines contain tracking chips and harmful chemicals. I don't trust them.".to_string(),
            personality: Personality::Distrustful,
        },
    ]
}
