//! Additive spam/ham scoring
//!
//! Lexicon hits and structural signals are summed into two independent,
//! non-negative accumulators. All contributions are plain sums, so the order
//! in which they are applied does not matter.

use crate::signals::SignalSet;
use serde::{Deserialize, Serialize};

/// Added to the spam score per matched spam term
pub const SPAM_KEYWORD_WEIGHT: f64 = 2.0;
/// Added to the ham score per matched ham term
pub const HAM_KEYWORD_WEIGHT: f64 = 1.5;
pub const MULTIPLE_EXCLAMATIONS_WEIGHT: f64 = 1.5;
pub const UPPERCASE_RUN_WEIGHT: f64 = 2.0;
pub const DIGIT_RUN_WEIGHT: f64 = 1.0;
pub const CURRENCY_SYMBOL_WEIGHT: f64 = 1.0;
pub const URL_LIKE_WEIGHT: f64 = 1.5;

/// Ham prior granted to short messages with little spam evidence
pub const SHORT_MESSAGE_HAM_BONUS: f64 = 2.0;
/// A message is short when it has fewer tokens than this
pub const SHORT_MESSAGE_MAX_TOKENS: usize = 5;
/// The short-message bonus applies only while the spam score stays below this
pub const SHORT_MESSAGE_SPAM_CEILING: f64 = 3.0;

/// Per-feature weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub spam_keyword: f64,
    pub ham_keyword: f64,
    pub multiple_exclamations: f64,
    pub uppercase_run: f64,
    pub digit_run: f64,
    pub currency_symbol: f64,
    pub url_like: f64,
    pub short_message_bonus: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            spam_keyword: SPAM_KEYWORD_WEIGHT,
            ham_keyword: HAM_KEYWORD_WEIGHT,
            multiple_exclamations: MULTIPLE_EXCLAMATIONS_WEIGHT,
            uppercase_run: UPPERCASE_RUN_WEIGHT,
            digit_run: DIGIT_RUN_WEIGHT,
            currency_symbol: CURRENCY_SYMBOL_WEIGHT,
            url_like: URL_LIKE_WEIGHT,
            short_message_bonus: SHORT_MESSAGE_HAM_BONUS,
        }
    }
}

impl Weights {
    /// Field names paired with their values, for validation and display
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("spam_keyword", self.spam_keyword),
            ("ham_keyword", self.ham_keyword),
            ("multiple_exclamations", self.multiple_exclamations),
            ("uppercase_run", self.uppercase_run),
            ("digit_run", self.digit_run),
            ("currency_symbol", self.currency_symbol),
            ("url_like", self.url_like),
            ("short_message_bonus", self.short_message_bonus),
        ]
    }
}

/// When the short-message ham bonus applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortMessageRule {
    pub max_tokens: usize,
    pub spam_ceiling: f64,
}

impl Default for ShortMessageRule {
    fn default() -> Self {
        Self {
            max_tokens: SHORT_MESSAGE_MAX_TOKENS,
            spam_ceiling: SHORT_MESSAGE_SPAM_CEILING,
        }
    }
}

/// Spam and ham accumulators for one message
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScorePair {
    pub spam: f64,
    pub ham: f64,
}

impl ScorePair {
    pub fn total(&self) -> f64 {
        self.spam + self.ham
    }

    /// Share of the total held by spam; 0.5 when there is no evidence at all
    pub fn spam_probability(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.spam / total
        } else {
            0.5
        }
    }
}

/// Everything the scorer reads from a message
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreInputs {
    pub spam_hits: usize,
    pub ham_hits: usize,
    pub signals: SignalSet,
    pub token_count: usize,
}

/// Whitespace as message text treats it: Unicode whitespace plus the BOM
pub fn is_message_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Number of pieces left after splitting on runs of whitespace.
///
/// Leading or trailing whitespace leaves an empty piece at that end, and
/// those pieces count as tokens.
pub fn token_count(text: &str) -> usize {
    let mut pieces = 1;
    let mut in_gap = false;
    for c in text.chars() {
        let gap = is_message_whitespace(c);
        if gap && !in_gap {
            pieces += 1;
        }
        in_gap = gap;
    }
    pieces
}

/// Combines lexicon hits and signals into a [`ScorePair`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scorer {
    weights: Weights,
    short_message: ShortMessageRule,
}

impl Scorer {
    pub fn new(weights: Weights, short_message: ShortMessageRule) -> Self {
        Self {
            weights,
            short_message,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn score(&self, inputs: &ScoreInputs) -> ScorePair {
        let w = &self.weights;
        let signals = &inputs.signals;

        let mut spam = w.spam_keyword * inputs.spam_hits as f64;
        let mut ham = w.ham_keyword * inputs.ham_hits as f64;

        for (on, weight) in [
            (signals.multiple_exclamations, w.multiple_exclamations),
            (signals.long_uppercase_run, w.uppercase_run),
            (signals.long_digit_run, w.digit_run),
            (signals.currency_symbol, w.currency_symbol),
            (signals.url_like, w.url_like),
        ] {
            if on {
                spam += weight;
            }
        }

        if inputs.token_count < self.short_message.max_tokens
            && spam < self.short_message.spam_ceiling
        {
            ham += w.short_message_bonus;
        }

        ScorePair { spam, ham }
    }
}
