//! Weighted keyword lexicon
//!
//! Two disjoint, ordered term lists matched as case-insensitive substrings of
//! the whole message. Matching is not tokenized, so `"no"` also hits inside
//! `"know"` and `"now"`. Each term is reported at most once per message, in
//! declaration order.

use aho_corasick::AhoCorasick;
use smsguard_core::{Error, Result};
use std::collections::HashSet;

/// Spam-indicative terms, in declaration order
pub const SPAM_TERMS: &[&str] = &[
    "free",
    "win",
    "winner",
    "cash",
    "prize",
    "urgent",
    "claim",
    "congratulations",
    "offer",
    "limited",
    "act now",
    "call now",
    "click here",
    "discount",
    "guarantee",
    "bonus",
    "reward",
    "money",
    "credit",
    "loan",
    "debt",
    "viagra",
    "pharmacy",
    "weight loss",
    "earn",
    "income",
    "million",
    "thousand",
    "100%",
    "account",
    "blocked",
    "suspended",
    "verify",
    "confirm",
    "password",
    "bank",
    "paypal",
    "text stop",
    "unsubscribe",
    "txt",
    "reply",
    "send",
    "mobile",
    "ringtone",
];

/// Ham-indicative terms, in declaration order
pub const HAM_TERMS: &[&str] = &[
    "meeting",
    "tomorrow",
    "today",
    "lunch",
    "dinner",
    "home",
    "work",
    "thanks",
    "thank you",
    "please",
    "how are",
    "love",
    "miss",
    "family",
    "friend",
    "mom",
    "dad",
    "okay",
    "sure",
    "yes",
    "no",
    "maybe",
];

/// Terms from each list found in one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconMatches<'a> {
    pub spam: Vec<&'a str>,
    pub ham: Vec<&'a str>,
}

/// Compiled spam and ham term sets.
///
/// Built once and shared read-only between classifier instances.
#[derive(Debug, Clone)]
pub struct Lexicon {
    spam_terms: Vec<String>,
    ham_terms: Vec<String>,
    spam: AhoCorasick,
    ham: AhoCorasick,
}

impl Lexicon {
    /// The built-in lexicon
    pub fn builtin() -> Result<Self> {
        Self::new(
            SPAM_TERMS.iter().map(|t| t.to_string()).collect(),
            HAM_TERMS.iter().map(|t| t.to_string()).collect(),
        )
    }

    /// Compile a lexicon from custom term lists.
    ///
    /// Terms are lowercased; the lists must be non-empty strings, free of
    /// duplicates and disjoint from each other.
    pub fn new(spam_terms: Vec<String>, ham_terms: Vec<String>) -> Result<Self> {
        let spam_terms: Vec<String> = spam_terms.iter().map(|t| t.to_lowercase()).collect();
        let ham_terms: Vec<String> = ham_terms.iter().map(|t| t.to_lowercase()).collect();
        validate_terms(&spam_terms, &ham_terms)?;

        let spam = AhoCorasick::new(&spam_terms).map_err(|e| {
            Error::classifier(format!("Failed to build spam term matcher: {e}"))
        })?;
        let ham = AhoCorasick::new(&ham_terms).map_err(|e| {
            Error::classifier(format!("Failed to build ham term matcher: {e}"))
        })?;

        Ok(Self {
            spam_terms,
            ham_terms,
            spam,
            ham,
        })
    }

    /// Find every term contained in `text`, ignoring case
    pub fn lookup(&self, text: &str) -> LexiconMatches<'_> {
        self.lookup_lowercase(&text.to_lowercase())
    }

    /// Same as [`Lexicon::lookup`] for text that is already lowercased
    pub fn lookup_lowercase(&self, lowered: &str) -> LexiconMatches<'_> {
        LexiconMatches {
            spam: matched_terms(&self.spam, &self.spam_terms, lowered),
            ham: matched_terms(&self.ham, &self.ham_terms, lowered),
        }
    }

    pub fn spam_terms(&self) -> &[String] {
        &self.spam_terms
    }

    pub fn ham_terms(&self) -> &[String] {
        &self.ham_terms
    }
}

fn matched_terms<'a>(matcher: &AhoCorasick, terms: &'a [String], haystack: &str) -> Vec<&'a str> {
    let mut hit = vec![false; terms.len()];
    // Overlapping search so that "win" and "winner" both register.
    for m in matcher.find_overlapping_iter(haystack) {
        hit[m.pattern().as_usize()] = true;
    }

    terms
        .iter()
        .zip(hit)
        .filter_map(|(term, hit)| hit.then_some(term.as_str()))
        .collect()
}

/// Check that two term lists form a usable lexicon
pub fn validate_terms(spam_terms: &[String], ham_terms: &[String]) -> Result<()> {
    let spam = unique_terms("spam", spam_terms)?;
    let ham = unique_terms("ham", ham_terms)?;

    let mut shared: Vec<&str> = spam.intersection(&ham).copied().collect();
    if !shared.is_empty() {
        shared.sort_unstable();
        return Err(Error::config(format!(
            "terms listed as both spam and ham: {}",
            shared.join(", ")
        )));
    }

    Ok(())
}

fn unique_terms<'a>(kind: &str, terms: &'a [String]) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::with_capacity(terms.len());
    for term in terms {
        if term.trim().is_empty() {
            return Err(Error::config(format!("empty {kind} term")));
        }
        if !seen.insert(term.as_str()) {
            return Err(Error::config(format!("duplicate {kind} term '{term}'")));
        }
    }
    Ok(seen)
}
