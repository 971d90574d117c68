use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;
use vaxtalk_application::ConversationEngine;
use vaxtalk_core::config::AppConfig;

use crate::commands::responder;
use crate::display;

const COMMANDS: &[&str] = &["/status", "/end", "/quit", "/help"];

/// Completion, highlighting and hints for the slash commands.
struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

/// What the REPL should do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Status,
    End,
    Quit,
    Help,
    Unknown(&'a str),
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Blank,
        "/status" => Input::Status,
        "/end" => Input::End,
        "/quit" | "/exit" => Input::Quit,
        "/help" => Input::Help,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        message => Input::Message(message),
    }
}

fn print_help() {
    println!("{}", "Type your reply to the patient and press Enter.".bright_black());
    println!("{}", "  /status  show turns and patient openness".bright_black());
    println!("{}", "  /end     end the session and show the summary".bright_black());
    println!("{}", "  /quit    leave without a summary".bright_black());
    println!();
}

pub async fn run(config: &AppConfig, persona: Option<String>, seed: Option<u64>) -> Result<()> {
    let engine = ConversationEngine::new(responder::build(config, seed));
    let persona_key = persona.unwrap_or_else(|| config.default_persona.clone());

    let started = engine.start_session(&persona_key).await;
    let session = engine.session_snapshot(&started.session_id).await?;
    let patient_name = session.persona.name.clone();
    debug!("Chat session {} for persona key {}", started.session_id, started.persona_key);

    let mut rl: Editor<ChatHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    println!("{}", "=== VaxTalk Practice ===".bright_magenta().bold());
    println!(
        "{}",
        format!("You are the pharmacist. Your patient today is {}.", patient_name).bright_black()
    );
    print_help();
    display::print_patient(&patient_name, &started.patient_message);

    loop {
        let line = match rl.readline("you> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/end' or '/quit' to leave.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                let summary = engine.end_session(&started.session_id).await?;
                display::print_summary(&summary);
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        match parse_input(&line) {
            Input::Blank => println!("{}", "Missing message".yellow()),
            Input::Help => print_help(),
            Input::Status => {
                let session = engine.session_snapshot(&started.session_id).await?;
                display::print_status(&session);
            }
            Input::End => {
                let summary = engine.end_session(&started.session_id).await?;
                display::print_summary(&summary);
                break;
            }
            Input::Quit => {
                engine.end_session(&started.session_id).await?;
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Input::Unknown(cmd) => println!("{}", format!("Unknown command: {}", cmd).yellow()),
            Input::Message(message) => {
                let _ = rl.add_history_entry(message);
                let result = engine.submit_turn(&started.session_id, message).await?;
                println!();
                display::print_patient(&patient_name, &result.patient_message);
                display::print_feedback(&result.feedback);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   "), Input::Blank);
        assert_eq!(parse_input("/status"), Input::Status);
        assert_eq!(parse_input(" /end "), Input::End);
        assert_eq!(parse_input("/exit"), Input::Quit);
        assert_eq!(parse_input("/frobnicate"), Input::Unknown("/frobnicate"));
        assert_eq!(
            parse_input("  I hear you, that is a fair worry.  "),
            Input::Message("I hear you, that is a fair worry.")
        );
    }
}
