//! Batch classification
//!
//! Messages are classified independently; output order always matches input
//! order, also when running in parallel.

use crate::classifier::Classifier;
use rayon::prelude::*;
use serde::Serialize;
use smsguard_core::{Label, Prediction};
use tracing::debug;

/// Classify each message in sequence
pub fn classify_batch<C, S>(classifier: &C, messages: &[S]) -> Vec<Prediction>
where
    C: Classifier + ?Sized,
    S: AsRef<str>,
{
    debug!(
        classifier = classifier.name(),
        messages = messages.len(),
        "Classifying batch"
    );

    messages
        .iter()
        .map(|message| classifier.classify(message.as_ref()))
        .collect()
}

/// Classify messages across the rayon thread pool
pub fn classify_batch_parallel<C, S>(classifier: &C, messages: &[S]) -> Vec<Prediction>
where
    C: Classifier + ?Sized,
    S: AsRef<str> + Sync,
{
    debug!(
        classifier = classifier.name(),
        messages = messages.len(),
        threads = rayon::current_num_threads(),
        "Classifying batch in parallel"
    );

    messages
        .par_iter()
        .map(|message| classifier.classify(message.as_ref()))
        .collect()
}

/// Spam/ham counts over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub spam: usize,
    pub ham: usize,
}

impl BatchSummary {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        predictions
            .iter()
            .fold(Self::default(), |mut summary, prediction| {
                summary.total += 1;
                match prediction.label {
                    Label::Spam => summary.spam += 1,
                    Label::Ham => summary.ham += 1,
                }
                summary
            })
    }
}
