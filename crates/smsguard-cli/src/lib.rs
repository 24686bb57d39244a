//! SMSGuard command-line front end
//!
//! Presentation layer over `smsguard-classifiers`: reads messages, renders
//! predictions and shows the fixed reference dataset and metrics.

pub mod cli;
pub mod compare;
pub mod fixtures;
pub mod input;
pub mod report;

pub use cli::{Cli, Commands};

use anyhow::{bail, Context};
use serde::Serialize;
use smsguard_classifiers::{
    classify_batch, classify_batch_parallel, Classifier, ClassifierConfig, SpamClassifier,
};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Build the classifier, from a YAML file when one is given
pub fn load_classifier(config_path: Option<&Path>) -> anyhow::Result<SpamClassifier> {
    let config = match config_path {
        Some(path) => {
            info!("Loading classifier config from {}", path.display());
            ClassifierConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => ClassifierConfig::default(),
    };

    Ok(SpamClassifier::with_config(&config)?)
}

/// Execute a parsed command line and return what should be printed
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Classify {
            message,
            example,
            explain,
        } => {
            let message = match (message.as_deref(), example) {
                (Some(message), _) => message,
                (None, Some(number)) => input::example_message(*number)
                    .with_context(|| format!("no example message {number}"))?,
                (None, None) => bail!("no message entered"),
            };

            let classifier = load_classifier(cli.config.as_deref())?;
            let prediction = classifier.classify(message);
            let analysis = explain.then(|| classifier.analyze(message));

            let view = report::PredictionReport {
                message,
                prediction: &prediction,
                analysis: analysis.as_ref(),
            };
            render(cli.json, &view, report::render_prediction)
        }

        Commands::Batch {
            file,
            sample,
            parallel,
        } => {
            let messages = if *sample {
                input::SAMPLE_BATCH.iter().map(|m| m.to_string()).collect()
            } else {
                input::read_batch(file.as_deref()).context("failed to read messages")?
            };
            if messages.is_empty() {
                bail!("no messages entered");
            }

            let classifier = load_classifier(cli.config.as_deref())?;
            let predictions = if *parallel {
                classify_batch_parallel(&classifier, &messages)
            } else {
                classify_batch(&classifier, &messages)
            };

            let batch = report::BatchReport::new(messages, predictions);
            info!("{}", batch.summary_line());
            render(cli.json, &batch, report::render_batch)
        }

        Commands::Dataset { label } => {
            let entries: Vec<_> = fixtures::filter_by_label(*label).collect();
            let stats = fixtures::DatasetStats::compute(fixtures::SAMPLE_DATASET);

            if cli.json {
                Ok(serde_json::to_string_pretty(&DatasetView {
                    stats,
                    entries: &entries,
                })?)
            } else {
                Ok(report::render_dataset(&entries, &stats)?)
            }
        }

        Commands::Metrics => render(cli.json, &fixtures::MODEL_METRICS, report::render_metrics),

        Commands::Compare => {
            let classifier = load_classifier(cli.config.as_deref())?;
            let comparison = compare::compare(&classifier, fixtures::SAMPLE_DATASET);
            render(cli.json, &comparison, report::render_comparison)
        }
    }
}

#[derive(Serialize)]
struct DatasetView<'a> {
    stats: fixtures::DatasetStats,
    entries: &'a [&'static smsguard_core::LabeledMessage],
}

fn render<T: Serialize>(
    json: bool,
    value: &T,
    text: fn(&T) -> Result<String, fmt::Error>,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value)?)
    }
}
