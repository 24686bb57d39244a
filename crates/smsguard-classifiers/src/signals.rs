//! Structural heuristics extracted from raw message text

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::Serialize;
use smsguard_core::{Error, Result};

/// `!` count at which a message counts as shouting
pub const MIN_EXCLAMATIONS: usize = 2;

/// Shortest run of consecutive ASCII uppercase letters that counts
pub const MIN_UPPERCASE_RUN: usize = 4;

/// Shortest run of consecutive ASCII digits that counts
pub const MIN_DIGIT_RUN: usize = 4;

pub const CURRENCY_SYMBOLS: [char; 4] = ['$', '£', '€', '₹'];

/// Lowercase substrings that mark a link
pub const URL_MARKERS: &[&str] = &["http", "www.", ".com", ".org", ".net"];

/// The five independent signals of one message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalSet {
    pub multiple_exclamations: bool,
    pub long_uppercase_run: bool,
    pub long_digit_run: bool,
    pub currency_symbol: bool,
    pub url_like: bool,
}

impl SignalSet {
    /// Names of the signals that fired
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.multiple_exclamations, "multiple_exclamations"),
            (self.long_uppercase_run, "long_uppercase_run"),
            (self.long_digit_run, "long_digit_run"),
            (self.currency_symbol, "currency_symbol"),
            (self.url_like, "url_like"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// Compiled matchers for the structural signals
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    uppercase_run: Regex,
    digit_run: Regex,
    url_markers: AhoCorasick,
}

impl SignalExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            uppercase_run: Regex::new(&format!("[A-Z]{{{MIN_UPPERCASE_RUN},}}")).map_err(|e| {
                Error::classifier(format!("Failed to compile uppercase regex: {}", e))
            })?,
            digit_run: Regex::new(&format!("[0-9]{{{MIN_DIGIT_RUN},}}")).map_err(|e| {
                Error::classifier(format!("Failed to compile digit regex: {}", e))
            })?,
            url_markers: AhoCorasick::new(URL_MARKERS).map_err(|e| {
                Error::classifier(format!("Failed to build URL matcher: {}", e))
            })?,
        })
    }

    /// Extract all signals from `text`
    pub fn extract(&self, text: &str) -> SignalSet {
        self.extract_with_lowercase(text, &text.to_lowercase())
    }

    /// Extract signals when the lowercased message is already at hand.
    ///
    /// Casing and digit signals read `text`; the URL signal reads `lowered`.
    pub fn extract_with_lowercase(&self, text: &str, lowered: &str) -> SignalSet {
        SignalSet {
            multiple_exclamations: text.matches('!').count() >= MIN_EXCLAMATIONS,
            long_uppercase_run: self.uppercase_run.is_match(text),
            long_digit_run: self.digit_run.is_match(text),
            currency_symbol: text.contains(CURRENCY_SYMBOLS),
            url_like: self.url_markers.is_match(lowered),
        }
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create signal extractor")
    }
}
