//! SMSGuard Classifiers
//!
//! Rule-based spam/ham classification for short text messages.
//!
//! A message flows through these stages:
//! - Lexicon: case-insensitive substring hits against spam and ham term lists
//! - Signals: punctuation, casing, digit, currency and link heuristics
//! - Scoring: weighted sums into a spam score and a ham score
//! - Decision: label plus a confidence in `[0.50, 0.99]`
//! - Evidence: the first few spam terms, reported with every prediction
//!
//! Classification is pure and total. Batches can be run sequentially or in
//! parallel with identical, order-preserving results.

pub mod batch;
pub mod classifier;
pub mod config;
pub mod decision;
pub mod evidence;
pub mod lexicon;
pub mod scoring;
pub mod signals;

pub use batch::{classify_batch, classify_batch_parallel, BatchSummary};
pub use classifier::{Analysis, Classifier, SpamClassifier};
pub use config::{ClassifierConfig, LexiconSpec};
pub use decision::{decide, ConfidenceBounds, Decision};
pub use lexicon::{Lexicon, LexiconMatches};
pub use scoring::{
    is_message_whitespace, token_count, ScoreInputs, ScorePair, Scorer, ShortMessageRule, Weights,
};
pub use signals::{SignalExtractor, SignalSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::{classify_batch, classify_batch_parallel, BatchSummary};
    pub use crate::classifier::{Classifier, SpamClassifier};
    pub use crate::config::ClassifierConfig;
    pub use smsguard_core::{Label, Prediction};
}
