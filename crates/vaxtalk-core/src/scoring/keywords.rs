//! Fixed word and phrase lists used by the scorer.
//!
//! All entries are lowercase; matching is a substring test against the
//! lowercased message.

pub const EMPATHY_KEYWORDS: &[&str] = &[
    "understand",
    "feel",
    "concern",
    "worry",
    "appreciate",
    "valid",
    "important",
    "hear",
    "listening",
    "respect",
    "i see",
    "makes sense",
    "thank you",
    "natural",
    "normal",
];

pub const ACKNOWLEDGMENT_PHRASES: &[&str] = &["your concern", "your worry", "you feel", "you're"];

pub const DISMISSIVE_PHRASES: &[&str] = &["just", "simply", "you should", "you must", "you need to"];

/// Trial and testing evidence.
pub const VACCINE_FACTS: &[&str] = &[
    "clinical trial",
    "fda approved",
    "tested",
    "study",
    "research",
    "data",
    "evidence",
    "scientist",
    "peer-reviewed",
    "effective",
];

pub const SAFETY_FACTS: &[&str] = &[
    "safe",
    "monitored",
    "side effects are",
    "rare",
    "temporary",
    "benefits outweigh",
    "millions",
    "approved",
];

pub const IMMUNE_SYSTEM_FACTS: &[&str] = &[
    "immune response",
    "antibodies",
    "protection",
    "immunity",
    "immune system",
    "body's defense",
];

pub const FACT_CATEGORIES: &[&[&str]] = &[VACCINE_FACTS, SAFETY_FACTS, IMMUNE_SYSTEM_FACTS];

pub const MISINFORMATION_FLAGS: &[&str] = &[
    "chip",
    "tracking",
    "dna change",
    "alter dna",
    "experimental",
    "not tested",
    "rushed",
    "conspiracy",
];

pub const HEDGING_WORDS: &[&str] = &["generally", "typically", "usually", "most", "many"];

pub const JARGON_TERMS: &[&str] = &[
    "immunoglobulin",
    "mrna",
    "adjuvant",
    "epitope",
    "pathogen",
    "antigen",
    "cytokine",
];

pub const CLARITY_PHRASES: &[&str] = &[
    "in other words",
    "for example",
    "this means",
    "let me explain",
    "simply put",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "glad",
    "happy",
    "safe",
    "safely",
    "effective",
    "helpful",
    "help",
    "helps",
    "hope",
    "appreciate",
    "thank",
    "thanks",
    "welcome",
    "benefit",
    "benefits",
    "protect",
    "protects",
    "protected",
    "reassuring",
    "comfortable",
    "confident",
    "healthy",
    "excellent",
    "wonderful",
    "positive",
    "support",
    "care",
    "caring",
    "kind",
    "better",
    "best",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "worse",
    "worst",
    "harm",
    "harmful",
    "dangerous",
    "danger",
    "risky",
    "scary",
    "afraid",
    "fear",
    "worried",
    "sick",
    "pain",
    "terrible",
    "awful",
    "wrong",
    "stupid",
    "ridiculous",
    "dumb",
    "hate",
    "angry",
    "distrust",
    "lie",
    "lies",
    "fake",
    "deadly",
    "death",
    "die",
    "severe",
    "problem",
    "problems",
];

/// Number of entries in `keywords` that occur in `haystack`.
pub(crate) fn count_matches(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| haystack.contains(*k)).count()
}

/// True if any entry in `keywords` occurs in `haystack`.
pub(crate) fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
