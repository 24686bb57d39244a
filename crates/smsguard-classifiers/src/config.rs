//! Configuration for the spam classifier

use crate::decision::ConfidenceBounds;
use crate::evidence::EVIDENCE_LIMIT;
use crate::lexicon::{validate_terms, HAM_TERMS, SPAM_TERMS};
use crate::scoring::{ShortMessageRule, Weights};
use serde::{Deserialize, Serialize};
use smsguard_core::{Error, Result};
use std::path::Path;

/// Tunable parameters of the classifier.
///
/// Every field falls back to the built-in constant, so a YAML file only needs
/// to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Per-feature score weights
    #[serde(default)]
    pub weights: Weights,

    /// Short-message ham prior
    #[serde(default)]
    pub short_message: ShortMessageRule,

    /// Confidence mapping range
    #[serde(default)]
    pub confidence: ConfidenceBounds,

    /// Maximum spam terms reported per prediction
    #[serde(default = "default_evidence_limit")]
    pub evidence_limit: usize,

    /// Replacement term lists; the built-in lexicon when absent
    #[serde(default)]
    pub lexicon: Option<LexiconSpec>,
}

/// Custom term lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconSpec {
    #[serde(default)]
    pub spam: Vec<String>,

    #[serde(default)]
    pub ham: Vec<String>,
}

impl LexiconSpec {
    /// The built-in term lists
    pub fn builtin() -> Self {
        Self {
            spam: SPAM_TERMS.iter().map(|t| t.to_string()).collect(),
            ham: HAM_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            short_message: ShortMessageRule::default(),
            confidence: ConfidenceBounds::default(),
            evidence_limit: default_evidence_limit(),
            lexicon: None,
        }
    }
}

impl ClassifierConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Term lists in effect
    pub fn lexicon_spec(&self) -> LexiconSpec {
        self.lexicon.clone().unwrap_or_else(LexiconSpec::builtin)
    }

    /// Check value ranges and term lists
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::config(format!(
                    "weight '{name}' must be a non-negative number, got {weight}"
                )));
            }
        }

        if !self.short_message.spam_ceiling.is_finite() {
            return Err(Error::config("short_message.spam_ceiling must be finite"));
        }

        let ConfidenceBounds { base, cap } = self.confidence;
        if !(0.0..=1.0).contains(&base) {
            return Err(Error::config(format!(
                "confidence.base must be within [0, 1], got {base}"
            )));
        }
        if !(base..=1.0).contains(&cap) {
            return Err(Error::config(format!(
                "confidence.cap must be within [{base}, 1], got {cap}"
            )));
        }

        if let Some(lexicon) = &self.lexicon {
            let spam: Vec<String> = lexicon.spam.iter().map(|t| t.to_lowercase()).collect();
            let ham: Vec<String> = lexicon.ham.iter().map(|t| t.to_lowercase()).collect();
            validate_terms(&spam, &ham)?;
        }

        Ok(())
    }
}

fn default_evidence_limit() -> usize {
    EVIDENCE_LIMIT
}
