//! Core types for SMSGuard

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unsolicited or promotional message
    Spam,
    /// Legitimate message
    Ham,
}

impl Label {
    /// Lowercase name used in output and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spam" => Ok(Self::Spam),
            "ham" => Ok(Self::Ham),
            _ => Err(Error::InvalidLabel(s.to_string())),
        }
    }
}

/// Result of classifying one message.
///
/// Produced once per call and handed to the caller in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Final decision
    pub label: Label,

    /// Heuristic confidence, rounded to two decimals, in `[0.50, 0.99]`
    pub confidence: f64,

    /// Spam terms found in the message, in lexicon order (at most five)
    pub matched_keywords: Vec<String>,
}

impl Prediction {
    /// Create a new prediction with no keyword evidence
    pub fn new(label: Label, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            matched_keywords: Vec::new(),
        }
    }

    /// Fixed result for empty or whitespace-only input
    pub fn fallback() -> Self {
        Self::new(Label::Ham, 0.5)
    }

    /// Attach keyword evidence
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.matched_keywords = keywords;
        self
    }

    pub fn is_spam(&self) -> bool {
        self.label == Label::Spam
    }

    /// Confidence as a percentage with one decimal, e.g. `"92.0%"`
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// A reference message with its known label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabeledMessage {
    pub message: &'static str,
    pub label: Label,
}

impl LabeledMessage {
    pub const fn spam(message: &'static str) -> Self {
        Self {
            message,
            label: Label::Spam,
        }
    }

    pub const fn ham(message: &'static str) -> Self {
        Self {
            message,
            label: Label::Ham,
        }
    }
}
