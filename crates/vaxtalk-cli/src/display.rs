//! Colored terminal rendering.

use colored::{ColoredString, Colorize};
use vaxtalk_core::feedback::{DimensionFeedback, Feedback, Level};
use vaxtalk_core::persona::Persona;
use vaxtalk_core::response::OpennessBand;
use vaxtalk_core::session::{Session, SessionSummary, Speaker};

fn level_colored(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Excellent => text.bright_green(),
        Level::Good => text.green(),
        Level::Fair => text.yellow(),
        Level::NeedsImprovement => text.red(),
    }
}

fn print_dimension(label: &str, dimension: &DimensionFeedback) {
    println!(
        "  {:<9} {:.2}  {}",
        label,
        dimension.score,
        level_colored(dimension.level)
    );
    println!("            {}", dimension.message.bright_black());
}

pub fn print_patient(name: &str, message: &str) {
    println!("{}", format!("[{}]", name).bright_magenta());
    for line in message.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

pub fn print_feedback(feedback: &Feedback) {
    println!("{}", feedback.overall.bold());
    print_dimension("Empathy", &feedback.empathy);
    print_dimension("Accuracy", &feedback.accuracy);
    print_dimension("Clarity", &feedback.clarity);

    for strength in &feedback.strengths {
        println!("  {} {}", "+".green(), strength);
    }
    for suggestion in &feedback.suggestions {
        println!("  {} [{}] {}", "*".yellow(), suggestion.category, suggestion.tip);
        println!("      {}", format!("e.g. \"{}\"", suggestion.example).bright_black());
    }
    println!();
}

pub fn print_status(session: &Session) {
    println!(
        "{}",
        format!(
            "{} | turns: {} | openness: {:.2} ({})",
            session.persona.name,
            session.turn_count,
            session.openness,
            OpennessBand::from_openness(session.openness)
        )
        .bright_black()
    );
}

pub fn print_summary(summary: &SessionSummary) {
    println!("{}", "=== Session Summary ===".bright_magenta().bold());
    println!("Patient:        {}", summary.persona_name);
    println!("Duration:       {:.1} min", summary.duration_minutes);
    println!("Turns:          {}", summary.turn_count);
    println!("Final openness: {:.2}", summary.final_openness);
    println!(
        "Average scores: empathy {:.2}, accuracy {:.2}, clarity {:.2}",
        summary.average_scores.empathy, summary.average_scores.accuracy, summary.average_scores.clarity
    );
    println!();
    for turn in &summary.history {
        let speaker = match turn.speaker {
            Speaker::Student => "You".green(),
            Speaker::Patient => summary.persona_name.bright_magenta(),
        };
        println!("{}: {}", speaker, turn.message);
    }
}

pub fn print_persona(persona: &Persona, is_default: bool) {
    let concerns = persona
        .concerns
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let marker = if is_default { " (default)".bright_black() } else { "".normal() };
    println!("{}{}", persona.key.bright_cyan().bold(), marker);
    println!(
        "  {} | {} | openness {:.1}",
        persona.name, persona.personality, persona.openness
    );
    println!("  concerns: {}", concerns);
    println!("  \"{}\"", persona.initial_message.bright_black());
}
