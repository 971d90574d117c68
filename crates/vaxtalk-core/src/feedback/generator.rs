//! Turns scores into human-readable coaching.

use super::model::{DimensionFeedback, Feedback, Level, Suggestion, SuggestionCategory};
use crate::scoring::{ScoreSet, word_count};

const MAX_SUGGESTIONS: usize = 3;
const STRENGTH_THRESHOLD: f64 = 0.7;
const SUGGESTION_THRESHOLD: f64 = 0.6;
const ACKNOWLEDGING_PHRASES: &[&str] = &["understand", "i hear", "appreciate"];
const FALLBACK_STRENGTH: &str = "Keep practicing to develop your strengths";

/// Builds [`Feedback`] for a message and its scores. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackSynthesizer;

impl FeedbackSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, message: &str, scores: &ScoreSet) -> Feedback {
        let words = word_count(message);

        Feedback {
            overall: overall_message(scores.average()).to_string(),
            empathy: dimension(scores.empathy, empathy_message(scores.empathy)),
            accuracy: dimension(scores.accuracy, accuracy_message(scores.accuracy)),
            clarity: dimension(scores.clarity, clarity_message(scores.clarity, words)),
            suggestions: suggestions(message, scores, words),
            strengths: strengths(message, scores),
        }
    }
}

fn dimension(score: f64, message: &str) -> DimensionFeedback {
    DimensionFeedback {
        score,
        level: Level::from_score(score),
        message: message.to_string(),
    }
}

fn overall_message(average: f64) -> &'static str {
    if average >= 0.8 {
        "Excellent response! You demonstrated strong empathy, provided accurate information, and communicated clearly."
    } else if average >= 0.65 {
        "Good response. You're on the right track, but there's room for improvement in some areas."
    } else if average >= 0.5 {
        "Fair response. Consider focusing on building rapport and providing clearer information."
    } else {
        "This response needs improvement. Focus on being more empathetic and providing accurate, clear information."
    }
}

fn empathy_message(score: f64) -> &'static str {
    if score >= 0.75 {
        "You demonstrated excellent empathy by acknowledging the patient's concerns and showing understanding."
    } else if score >= 0.6 {
        "You showed good empathy. To improve, try using more phrases that validate the patient's feelings."
    } else if score >= 0.4 {
        "Your empathy could be stronger. Remember to acknowledge the patient's concerns before providing information."
    } else {
        "Try to be more empathetic. Start by validating the patient's feelings with phrases like 'I understand your concern' or 'That's a valid worry.'"
    }
}

fn accuracy_message(score: f64) -> &'static str {
    if score >= 0.75 {
        "You provided accurate, evidence-based information. Well done!"
    } else if score >= 0.6 {
        "Good accuracy. Consider adding specific data or studies to strengthen your response."
    } else if score >= 0.4 {
        "Include more factual information. Reference clinical trials, FDA approval, or specific statistics."
    } else {
        "Your response needs more accurate information. Avoid speculation and focus on evidence-based facts about vaccine safety and efficacy."
    }
}

fn clarity_message(score: f64, words: usize) -> &'static str {
    if score >= 0.75 {
        "Your message was clear and well-structured. Great job!"
    } else if score >= 0.6 {
        "Generally clear. Try to organize your thoughts into 2-3 concise sentences."
    } else if score >= 0.4 {
        if words < 15 {
            "Your response is too brief. Provide more detail to address the patient's concerns."
        } else {
            "Simplify your language. Avoid excessive jargon and keep sentences concise."
        }
    } else if words < 10 {
        "Your response is too short. Elaborate more to address the patient's concerns thoroughly."
    } else {
        "Your response is unclear or too complex. Use simpler language and break down information into digestible parts."
    }
}

fn suggestion(category: SuggestionCategory, tip: &str, example: &str) -> Suggestion {
    Suggestion {
        category,
        tip: tip.to_string(),
        example: example.to_string(),
    }
}

fn suggestions(message: &str, scores: &ScoreSet, words: usize) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if scores.empathy < SUGGESTION_THRESHOLD {
        out.push(suggestion(
            SuggestionCategory::Empathy,
            "Start your response by acknowledging the patient's feelings: 'I understand why you might feel that way...'",
            "I can see why you're concerned about side effects. Many people share that worry, and it's completely valid.",
        ));
    }

    if scores.accuracy < SUGGESTION_THRESHOLD {
        out.push(suggestion(
            SuggestionCategory::Accuracy,
            "Include specific facts and data to support your points.",
            "Clinical trials with over 30,000 participants showed that the vaccine is over 90% effective and has a strong safety profile.",
        ));
    }

    if scores.clarity < SUGGESTION_THRESHOLD {
        out.push(if words < 15 {
            suggestion(
                SuggestionCategory::Clarity,
                "Provide more detailed information while staying focused.",
                "Expand your response to include specific examples and explanations that address the patient's concern.",
            )
        } else {
            suggestion(
                SuggestionCategory::Clarity,
                "Keep your response concise and focused on 1-2 main points.",
                "Break complex information into shorter, more digestible sentences.",
            )
        });
    }

    if !message.contains('?') {
        out.push(suggestion(
            SuggestionCategory::Engagement,
            "Ask follow-up questions to better understand the patient's concerns.",
            "What specifically worries you most about the vaccine?",
        ));
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}

fn strengths(message: &str, scores: &ScoreSet) -> Vec<String> {
    let lower = message.to_lowercase();
    let checks = [
        (scores.empathy >= STRENGTH_THRESHOLD, "Strong empathetic communication"),
        (scores.accuracy >= STRENGTH_THRESHOLD, "Accurate, evidence-based information"),
        (scores.clarity >= STRENGTH_THRESHOLD, "Clear and concise communication"),
        (message.contains('?'), "Good use of questions for engagement"),
        (
            ACKNOWLEDGING_PHRASES.iter().any(|p| lower.contains(p)),
            "Acknowledges patient perspective",
        ),
    ];

    let found: Vec<String> = checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
        .collect();

    if found.is_empty() {
        vec![FALLBACK_STRENGTH.to_string()]
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(empathy: f64, accuracy: f64, clarity: f64) -> ScoreSet {
        ScoreSet {
            empathy,
            accuracy,
            clarity,
            ..ScoreSet::default()
        }
    }

    fn generate(message: &str, s: ScoreSet) -> Feedback {
        FeedbackSynthesizer::new().generate(message, &s)
    }

    #[test]
    fn test_overall_thresholds() {
        assert!(generate("x", scores(0.85, 0.8, 0.82)).overall.starts_with("Excellent"));
        assert!(generate("x", scores(0.7, 0.7, 0.7)).overall.starts_with("Good"));
        assert!(generate("x", scores(0.5, 0.5, 0.5)).overall.starts_with("Fair"));
        assert!(generate("x", scores(0.3, 0.4, 0.35)).overall.starts_with("This response needs improvement"));
    }

    #[test]
    fn test_levels() {
        assert_eq!(Level::from_score(0.8), Level::Excellent);
        assert_eq!(Level::from_score(0.79), Level::Good);
        assert_eq!(Level::from_score(0.65), Level::Good);
        assert_eq!(Level::from_score(0.5), Level::Fair);
        assert_eq!(Level::from_score(0.49), Level::NeedsImprovement);
        assert_eq!(Level::NeedsImprovement.to_string(), "Needs Improvement");
    }

    #[test]
    fn test_dimension_ladders() {
        let f = generate("I understand your concerns about vaccine safety.", scores(0.75, 0.6, 0.4));
        assert!(f.empathy.message.starts_with("You demonstrated excellent empathy"));
        assert_eq!(f.empathy.level, Level::Good);
        assert!(f.accuracy.message.starts_with("Good accuracy"));
        assert!(f.clarity.message.starts_with("Your response is too brief"));
    }

    #[test]
    fn test_clarity_branches_on_word_count() {
        let long = "This is a longer message that definitely has more than fifteen words in it so the simplify branch applies here.";
        assert!(generate(long, scores(0.5, 0.5, 0.45)).clarity.message.starts_with("Simplify"));
        assert!(generate("Too short.", scores(0.5, 0.5, 0.3)).clarity.message.starts_with("Your response is too short"));
        assert!(generate(long, scores(0.5, 0.5, 0.3)).clarity.message.starts_with("Your response is unclear"));
    }

    #[test]
    fn test_suggestions_are_capped_in_check_order() {
        let f = generate("Get vaccinated.", scores(0.3, 0.4, 0.35));
        let categories: Vec<SuggestionCategory> = f.suggestions.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SuggestionCategory::Empathy,
                SuggestionCategory::Accuracy,
                SuggestionCategory::Clarity
            ]
        );
        assert_eq!(f.suggestions[2].tip, "Provide more detailed information while staying focused.");
    }

    #[test]
    fn test_engagement_suggestion_when_no_question() {
        let f = generate("I hear you.", scores(0.9, 0.5, 0.9));
        let categories: Vec<SuggestionCategory> = f.suggestions.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![SuggestionCategory::Accuracy, SuggestionCategory::Engagement]);
    }

    #[test]
    fn test_no_suggestions_for_strong_question() {
        let f = generate("What worries you most?", scores(0.9, 0.9, 0.9));
        assert!(f.suggestions.is_empty());
    }

    #[test]
    fn test_strengths() {
        let f = generate("I appreciate you asking. What worries you?", scores(0.7, 0.2, 0.7));
        assert_eq!(
            f.strengths,
            vec![
                "Strong empathetic communication",
                "Clear and concise communication",
                "Good use of questions for engagement",
                "Acknowledges patient perspective",
            ]
        );
    }

    #[test]
    fn test_strengths_fallback() {
        let f = generate("Get vaccinated.", scores(0.3, 0.4, 0.35));
        assert_eq!(f.strengths, vec![FALLBACK_STRENGTH.to_string()]);
    }

    #[test]
    fn test_zero_scores_do_not_panic() {
        let f = generate("", ScoreSet::zero());
        assert_eq!(f.empathy.level, Level::NeedsImprovement);
        assert_eq!(f.suggestions.len(), 3);
        assert!(!f.strengths.is_empty());
    }
}
