use crate::input::EXAMPLE_MESSAGES;
use clap::{Parser, Subcommand};
use smsguard_core::Label;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smsguard")]
#[command(author, version, about = "Classify SMS messages as spam or ham")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Classifier configuration file (YAML)
    #[arg(short, long, global = true, env = "SMSGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single message
    Classify {
        /// Message text
        #[arg(required_unless_present = "example")]
        message: Option<String>,

        /// Classify built-in example N instead of MESSAGE
        #[arg(
            long,
            value_name = "N",
            conflicts_with = "message",
            value_parser = clap::value_parser!(u64).range(1..=EXAMPLE_MESSAGES.len() as u64)
        )]
        example: Option<u64>,

        /// Show scores, ham keywords and structural signals
        #[arg(short, long)]
        explain: bool,
    },

    /// Classify one message per line from a file or stdin
    Batch {
        /// Input file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Use the built-in sample batch
        #[arg(long, conflicts_with = "file")]
        sample: bool,

        /// Spread classification over all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Show the labeled sample dataset
    Dataset {
        /// Only show messages with this label (spam or ham)
        #[arg(short, long, value_parser = parse_label)]
        label: Option<Label>,
    },

    /// Show the reference model's evaluation metrics
    Metrics,

    /// Classify the sample dataset and compare against its labels
    Compare,
}

fn parse_label(s: &str) -> Result<Label, String> {
    s.parse().map_err(|e: smsguard_core::Error| e.to_string())
}
