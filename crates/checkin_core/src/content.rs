//! Static presentation content.
//!
//! # Responsibility
//! - Supply the non-empty phrase lists the front-end renders verbatim or
//!   picks from at random.
//!
//! The only contract is "non-empty list of strings"; wording is free to
//! change without touching any other module.

use rand::Rng;

/// Short grounding phrases, one shown per visit.
pub const ANCHOR_PHRASES: &[&str] = &[
    "I only control my own actions.",
    "Other people's expectations are not my orders.",
    "One small action is enough for today.",
    "I can notice the pressure without obeying it.",
    "Today I decide what today means.",
    "Protecting my own time is allowed.",
];

/// Identity reminders rendered verbatim on the check-in page.
pub const IDENTITY_REMINDERS: &[&str] = &[
    "I am the one who decides, not the one who reacts.",
    "My worth is not measured by how much I carry for others.",
    "Saying no to them is saying yes to me.",
];

/// Picks a random anchor phrase.
pub fn anchor_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ANCHOR_PHRASES[rng.random_range(0..ANCHOR_PHRASES.len())]
}

/// Deterministic phrase for a given day key, stable across visits that day.
pub fn daily_anchor_phrase(day_key: &str) -> &'static str {
    let sum: usize = day_key.bytes().map(usize::from).sum();
    ANCHOR_PHRASES[sum % ANCHOR_PHRASES.len()]
}
