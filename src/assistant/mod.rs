//! Scripted question-answering assistant.
//!
//! `respond` classifies free-text input against the ordered rule table in
//! [`rules`] and returns the canned reply of the first rule whose keyword
//! groups all match. Matching is plain lower-cased substring containment —
//! no stemming, no punctuation stripping.
//!
//! This is a single-shot classify-and-respond operation, re-evaluated
//! independently per call. The caller owns the conversation log; see
//! `crate::state`.

pub mod rules;

pub use rules::{EXAMPLE_QUESTIONS, FALLBACK_RESPONSE, GREETING};

/// A predicate-response pair.
///
/// The predicate is a conjunction of keyword groups; a group matches when
/// any of its alternatives is contained in the lower-cased input.
pub struct Rule {
    pub keywords: &'static [&'static [&'static str]],
    pub response: &'static str,
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .all(|group| group.iter().any(|kw| normalized.contains(kw)))
    }
}

/// Select the canned reply for free-text user input.
///
/// Evaluates the rule table top to bottom and returns the response of the
/// first rule that fires, or [`FALLBACK_RESPONSE`] when none does. Total
/// and deterministic: same input, same output, on every call.
pub fn respond(input: &str) -> &'static str {
    let normalized = input.to_lowercase();
    rules::RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.response)
        .unwrap_or(rules::FALLBACK_RESPONSE)
}
