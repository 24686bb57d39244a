//! Side-by-side view of live predictions and reference labels

use serde::Serialize;
use smsguard_classifiers::{classify_batch_parallel, Classifier};
use smsguard_core::{Label, LabeledMessage, Prediction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub message: &'static str,
    pub expected: Label,
    pub prediction: Prediction,
}

impl ComparisonRow {
    pub fn agrees(&self) -> bool {
        self.prediction.label == self.expected
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub agreements: usize,
}

impl Comparison {
    pub fn disagreements(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| !row.agrees())
    }
}

/// Classify every reference entry and pair it with its known label
pub fn compare<C>(classifier: &C, entries: &[LabeledMessage]) -> Comparison
where
    C: Classifier + ?Sized,
{
    let messages: Vec<&str> = entries.iter().map(|entry| entry.message).collect();
    let predictions = classify_batch_parallel(classifier, &messages);

    let rows: Vec<ComparisonRow> = entries
        .iter()
        .zip(predictions)
        .map(|(entry, prediction)| ComparisonRow {
            message: entry.message,
            expected: entry.label,
            prediction,
        })
        .collect();
    let agreements = rows.iter().filter(|row| row.agrees()).count();

    Comparison { rows, agreements }
}
