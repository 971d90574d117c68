//! Response tiers and their scripted candidate pools.
//!
//! The patient's behaviour is driven by a continuous openness value.
//! [`ResponseTier::select`] turns that value (plus the turn count, the
//! message topic and its empathy score) into a discrete tier, and
//! [`ResponseTier::candidates`] lists the replies for that tier.

mod pools;
mod tier;

pub use tier::{LowMood, MediumTopic, OpennessBand, ResponseTier};
