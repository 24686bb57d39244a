//! Plain-text and JSON rendering of classifier output and fixtures

use crate::compare::Comparison;
use crate::fixtures::{DatasetStats, ModelMetrics};
use serde::Serialize;
use smsguard_classifiers::{Analysis, BatchSummary};
use smsguard_core::{Label, LabeledMessage, Prediction};
use std::fmt::{self, Write};

/// Messages longer than this are cut in tables
const MESSAGE_COLUMN_WIDTH: usize = 60;

/// One numbered row of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub index: usize,
    pub message: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

/// Complete batch output
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub results: Vec<BatchRow>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(messages: Vec<String>, predictions: Vec<Prediction>) -> Self {
        let summary = BatchSummary::from_predictions(&predictions);
        let results = messages
            .into_iter()
            .zip(predictions)
            .enumerate()
            .map(|(i, (message, prediction))| BatchRow {
                index: i + 1,
                message,
                prediction,
            })
            .collect();

        Self { results, summary }
    }

    /// "Processed N messages: S spam, H ham"
    pub fn summary_line(&self) -> String {
        format!(
            "Processed {} messages: {} spam, {} ham",
            self.summary.total, self.summary.spam, self.summary.ham
        )
    }
}

/// Single-message output, with optional scoring details
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport<'a> {
    pub message: &'a str,
    #[serde(flatten)]
    pub prediction: &'a Prediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<&'a Analysis>,
}

pub fn render_prediction(report: &PredictionReport<'_>) -> Result<String, fmt::Error> {
    let prediction = report.prediction;
    let mut out = String::new();

    writeln!(
        out,
        "{} ({} confidence)",
        prediction.label.as_str().to_uppercase(),
        prediction.confidence_percent()
    )?;
    if !prediction.matched_keywords.is_empty() {
        writeln!(out, "Spam keywords: {}", prediction.matched_keywords.join(", "))?;
    }

    if let Some(analysis) = report.analysis {
        writeln!(
            out,
            "Scores: spam {:.1}, ham {:.1}",
            analysis.scores.spam, analysis.scores.ham
        )?;
        writeln!(out, "Tokens: {}", analysis.token_count)?;
        writeln!(out, "Ham keywords: {}", join_or_none(&analysis.ham_matches))?;
        writeln!(out, "Signals: {}", join_or_none(&analysis.signals.active()))?;
    }

    Ok(out)
}

pub fn render_batch(report: &BatchReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{:>4}  {:<60}  {:<6}  {:>10}", "#", "Message", "Label", "Confidence")?;
    for row in &report.results {
        writeln!(
            out,
            "{:>4}  {:<60}  {:<6}  {:>10}",
            row.index,
            truncate(&row.message, MESSAGE_COLUMN_WIDTH),
            row.prediction.label,
            row.prediction.confidence_percent()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", report.summary_line())?;

    Ok(out)
}

pub fn render_dataset(
    entries: &[&LabeledMessage],
    stats: &DatasetStats,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "Total: {}  Spam: {} ({})  Ham: {} ({})",
        stats.total,
        stats.spam,
        stats.share_percent(Label::Spam),
        stats.ham,
        stats.share_percent(Label::Ham)
    )?;
    writeln!(out)?;
    for entry in entries {
        writeln!(out, "[{:<4}] {}", entry.label, entry.message)?;
    }

    Ok(out)
}

pub fn render_metrics(metrics: &ModelMetrics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let cm = &metrics.confusion_matrix;

    writeln!(out, "Accuracy: {:.1}%", metrics.accuracy * 100.0)?;
    writeln!(out)?;
    writeln!(out, "{:<10} {:>8} {:>8}", "", "Ham", "Spam")?;
    for (name, figure) in [
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1 score", metrics.f1_score),
    ] {
        writeln!(out, "{:<10} {:>8.2} {:>8.2}", name, figure.ham, figure.spam)?;
    }
    writeln!(out)?;
    writeln!(out, "Confusion matrix:")?;
    writeln!(out, "  True positive:  {}", cm.true_positive)?;
    writeln!(out, "  True negative:  {}", cm.true_negative)?;
    writeln!(out, "  False positive: {}", cm.false_positive)?;
    writeln!(out, "  False negative: {}", cm.false_negative)?;
    writeln!(out)?;
    writeln!(
        out,
        "Samples: {} ({} spam, {} ham)",
        metrics.total_samples, metrics.spam_samples, metrics.ham_samples
    )?;

    Ok(out)
}

pub fn render_comparison(comparison: &Comparison) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{:<6}  {:<6}  {:>10}  {}", "Ref", "Pred", "Confidence", "Message")?;
    for row in &comparison.rows {
        writeln!(
            out,
            "{:<6}  {:<6}  {:>10}  {}{}",
            row.expected,
            row.prediction.label,
            row.prediction.confidence_percent(),
            truncate(row.message, MESSAGE_COLUMN_WIDTH),
            if row.agrees() { "" } else { "  (mismatch)" }
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Agreement: {}/{}",
        comparison.agreements,
        comparison.rows.len()
    )?;

    Ok(out)
}

/// Cut `text` to at most `width` characters, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
