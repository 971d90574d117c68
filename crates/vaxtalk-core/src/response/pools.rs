//! Scripted patient replies for each response tier.

use super::tier::{LowMood, MediumTopic, ResponseTier};

const HIGH: &[&str] = &[
    "You know, that actually makes sense. I hadn't thought about it that way before.",
    "I appreciate you taking the time to explain this. I'm starting to feel better about it.",
    "Thank you for addressing my concerns. I think I understand better now.",
    "That's reassuring to hear. Maybe I was worrying too much.",
];

const READY_TO_PROCEED: &[&str] = &[
    "Okay, I think you've convinced me. What are the next steps to get vaccinated?",
    "I feel much better about this now. Thank you for being so patient with me.",
];

const MEDIUM_SIDE_EFFECTS: &[&str] = &[
    "I see. But what about the people who have had severe reactions?",
    "That helps, but I'm still worried about potential side effects.",
    "How common are these side effects you mentioned?",
];

const MEDIUM_SAFETY: &[&str] = &[
    "I understand they did testing, but was it really enough time?",
    "That's somewhat reassuring, but I still have some doubts.",
    "Can you tell me more about the testing process?",
];

const MEDIUM_GENERAL: &[&str] = &[
    "I'm listening, but I'm not entirely convinced yet.",
    "That's interesting. Can you explain more?",
    "I appreciate the information, but I still have questions.",
];

const LOW_CONFRONTATIONAL: &[&str] = &[
    "You're not really listening to my concerns.",
    "I don't think you understand how I feel about this.",
    "This doesn't feel like you care about my worries.",
];

const LOW_SKEPTICAL: &[&str] = &[
    "I've heard that before, but I'm still not sure I believe it.",
    "But what about all the stories I've heard?",
    "I don't know... I'm still very skeptical.",
    "That's what they say, but how can I be sure?",
];

impl ResponseTier {
    /// The ordered candidate replies for this tier. Never empty.
    pub fn candidates(&self) -> Vec<&'static str> {
        match self {
            ResponseTier::High { ready_to_proceed } => {
                let mut pool = HIGH.to_vec();
                if *ready_to_proceed {
                    pool.extend_from_slice(READY_TO_PROCEED);
                }
                pool
            }
            ResponseTier::Medium { topic } => match topic {
                MediumTopic::SideEffects => MEDIUM_SIDE_EFFECTS.to_vec(),
                MediumTopic::Safety => MEDIUM_SAFETY.to_vec(),
                MediumTopic::General => MEDIUM_GENERAL.to_vec(),
            },
            ResponseTier::Low { mood } => match mood {
                LowMood::Confrontational => LOW_CONFRONTATIONAL.to_vec(),
                LowMood::Skeptical => LOW_SKEPTICAL.to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_pool_grows_when_ready() {
        assert_eq!(ResponseTier::High { ready_to_proceed: false }.candidates().len(), 4);
        let ready = ResponseTier::High { ready_to_proceed: true }.candidates();
        assert_eq!(ready.len(), 6);
        assert_eq!(ready[4], READY_TO_PROCEED[0]);
    }

    #[test]
    fn test_every_tier_has_candidates() {
        let tiers = [
            ResponseTier::Medium { topic: MediumTopic::SideEffects },
            ResponseTier::Medium { topic: MediumTopic::Safety },
            ResponseTier::Medium { topic: MediumTopic::General },
            ResponseTier::Low { mood: LowMood::Confrontational },
            ResponseTier::Low { mood: LowMood::Skeptical },
        ];
        for tier in tiers {
            assert!(!tier.candidates().is_empty(), "{tier:?}");
        }
    }
}
