use crate::display;
use vaxtalk_core::persona::{DEFAULT_PERSONA_KEY, PersonaCatalog};

pub fn run() {
    let catalog = PersonaCatalog::builtin();
    for persona in catalog.list() {
        display::print_persona(persona, persona.key == DEFAULT_PERSONA_KEY);
        println!();
    }
}
