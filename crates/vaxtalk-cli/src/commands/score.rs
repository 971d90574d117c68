use anyhow::{Result, bail};
use serde::Serialize;
use vaxtalk_core::feedback::{Feedback, FeedbackSynthesizer};
use vaxtalk_core::scoring::{ScoreSet, Scorer};

#[derive(Serialize)]
struct ScoreReport {
    scores: ScoreSet,
    feedback: Feedback,
}

pub fn run(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Missing message");
    }

    let scores = Scorer::new().score(message);
    let report = ScoreReport {
        feedback: FeedbackSynthesizer::new().generate(message, &scores),
        scores,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
