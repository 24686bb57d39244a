//! Classifier trait and the rule-based spam classifier

use crate::config::ClassifierConfig;
use crate::decision::{decide, ConfidenceBounds};
use crate::evidence::select_evidence;
use crate::lexicon::Lexicon;
use crate::scoring::{is_message_whitespace, token_count, ScoreInputs, ScorePair, Scorer};
use crate::signals::{SignalExtractor, SignalSet};
use serde::Serialize;
use smsguard_core::{Prediction, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// Trait for all message classifiers.
///
/// Classification is total: every input string yields a prediction.
pub trait Classifier: Send + Sync {
    /// Classify the given text
    fn classify(&self, text: &str) -> Prediction;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Intermediate values behind one prediction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    /// Every spam term found, before truncation
    pub spam_matches: Vec<String>,
    pub ham_matches: Vec<String>,
    pub signals: SignalSet,
    pub token_count: usize,
    pub scores: ScorePair,
}

/// Deterministic keyword-and-heuristics spam classifier.
///
/// Matchers are compiled once; clones share them.
#[derive(Debug, Clone)]
pub struct SpamClassifier {
    name: String,
    lexicon: Arc<Lexicon>,
    signals: Arc<SignalExtractor>,
    scorer: Scorer,
    bounds: ConfidenceBounds,
    evidence_limit: usize,
}

impl SpamClassifier {
    /// Create a classifier with the built-in lexicon and weights
    pub fn new() -> Result<Self> {
        Self::with_config(&ClassifierConfig::default())
    }

    /// Create a classifier from configuration
    pub fn with_config(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let spec = config.lexicon_spec();
        let lexicon = Lexicon::new(spec.spam, spec.ham)?;
        debug!(
            spam_terms = lexicon.spam_terms().len(),
            ham_terms = lexicon.ham_terms().len(),
            "Built spam classifier"
        );

        Ok(Self::with_lexicon(Arc::new(lexicon), config))
    }

    /// Create a classifier around an already compiled lexicon.
    ///
    /// The lexicon entries of `config` are ignored.
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: &ClassifierConfig) -> Self {
        Self {
            name: "spam".to_string(),
            lexicon,
            signals: Arc::new(SignalExtractor::default()),
            scorer: Scorer::new(config.weights, config.short_message),
            bounds: config.confidence,
            evidence_limit: config.evidence_limit,
        }
    }

    /// Set a custom name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a message; blank messages score zero on both sides
    pub fn score(&self, text: &str) -> ScorePair {
        self.analyze(text).scores
    }

    /// Run every stage short of the final decision
    pub fn analyze(&self, text: &str) -> Analysis {
        if is_blank(text) {
            return Analysis::default();
        }

        let lowered = text.to_lowercase();
        let matches = self.lexicon.lookup_lowercase(&lowered);
        let signals = self.signals.extract_with_lowercase(text, &lowered);

        let inputs = ScoreInputs {
            spam_hits: matches.spam.len(),
            ham_hits: matches.ham.len(),
            signals,
            token_count: token_count(text),
        };

        Analysis {
            spam_matches: matches.spam.iter().map(|t| t.to_string()).collect(),
            ham_matches: matches.ham.iter().map(|t| t.to_string()).collect(),
            signals,
            token_count: inputs.token_count,
            scores: self.scorer.score(&inputs),
        }
    }

    /// Classify every message, preserving order
    pub fn classify_batch<S: AsRef<str>>(&self, messages: &[S]) -> Vec<Prediction> {
        crate::batch::classify_batch(self, messages)
    }
}

impl Default for SpamClassifier {
    fn default() -> Self {
        Self::new().expect("Failed to create spam classifier")
    }
}

impl Classifier for SpamClassifier {
    fn classify(&self, text: &str) -> Prediction {
        if is_blank(text) {
            trace!("Blank message, returning fallback prediction");
            return Prediction::fallback();
        }

        let analysis = self.analyze(text);
        let decision = decide(&analysis.scores, &self.bounds);
        let spam_matches: Vec<&str> = analysis.spam_matches.iter().map(String::as_str).collect();

        trace!(
            label = %decision.label,
            confidence = decision.confidence,
            spam_score = analysis.scores.spam,
            ham_score = analysis.scores.ham,
            "Classified message"
        );

        Prediction::new(decision.label, decision.confidence)
            .with_keywords(select_evidence(&spam_matches, self.evidence_limit))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_message_whitespace)
}
