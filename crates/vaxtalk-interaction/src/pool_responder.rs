//! Scripted reply selection.

use crate::provider::{ReplyRequest, ResponseProvider};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::sync::Mutex;
use vaxtalk_core::response::ResponseTier;
use vaxtalk_core::{Result, VaxtalkError};

/// Picks a reply uniformly at random from the tier's candidate pool.
///
/// The random source is injected so that tests (and `--seed`) can make the
/// choice reproducible.
pub struct PoolResponder {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl PoolResponder {
    /// Uses an entropy-seeded `StdRng`.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Draws one candidate for `tier`.
    pub fn pick(&self, tier: &ResponseTier) -> Result<&'static str> {
        let candidates = tier.candidates();
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        candidates
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| VaxtalkError::provider(format!("no candidates for tier {tier:?}")))
    }
}

impl Default for PoolResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PoolResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolResponder").finish_non_exhaustive()
    }
}

#[async_trait]
impl ResponseProvider for PoolResponder {
    async fn generate_reply(&self, request: &ReplyRequest<'_>) -> Result<String> {
        self.pick(&request.tier).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use vaxtalk_core::persona::PersonaCatalog;
    use vaxtalk_core::response::{LowMood, MediumTopic};
    use vaxtalk_core::scoring::ScoreSet;

    #[test]
    fn test_step_rng_picks_first_candidate() {
        let responder = PoolResponder::with_rng(StepRng::new(0, 0));
        let tier = ResponseTier::Low { mood: LowMood::Confrontational };
        assert_eq!(responder.pick(&tier).unwrap(), tier.candidates()[0]);
    }

    #[test]
    fn test_pick_is_always_a_candidate() {
        let responder = PoolResponder::with_seed(7);
        let tiers = [
            ResponseTier::High { ready_to_proceed: true },
            ResponseTier::High { ready_to_proceed: false },
            ResponseTier::Medium { topic: MediumTopic::SideEffects },
            ResponseTier::Medium { topic: MediumTopic::Safety },
            ResponseTier::Medium { topic: MediumTopic::General },
            ResponseTier::Low { mood: LowMood::Skeptical },
            ResponseTier::Low { mood: LowMood::Confrontational },
        ];
        for tier in tiers {
            for _ in 0..20 {
                let reply = responder.pick(&tier).unwrap();
                assert!(tier.candidates().contains(&reply), "{reply} not in {tier:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = PoolResponder::with_seed(42);
        let b = PoolResponder::with_seed(42);
        let tier = ResponseTier::High { ready_to_proceed: true };
        let seq_a: Vec<_> = (0..10).map(|_| a.pick(&tier).unwrap()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.pick(&tier).unwrap()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[tokio::test]
    async fn test_generate_reply_uses_request_tier() {
        let persona = PersonaCatalog::builtin().default_persona();
        let scores = ScoreSet::zero();
        let tier = ResponseTier::Medium { topic: MediumTopic::Safety };
        let request = ReplyRequest {
            persona: &persona,
            history: &[],
            student_message: "It has been tested",
            scores: &scores,
            openness: 0.5,
            turn_count: 1,
            tier,
        };

        let responder = PoolResponder::with_rng(StepRng::new(0, 0));
        let reply = responder.generate_reply(&request).await.unwrap();
        assert_eq!(reply, tier.candidates()[0]);
    }
}
