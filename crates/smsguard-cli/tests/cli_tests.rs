//! Integration tests for the smsguard command line

use clap::Parser;
use smsguard_cli::{run, Cli};
use std::io::Write;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["smsguard"];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv)?)
}

#[test]
fn test_classify_text_output() {
    let output = run_args(&["classify", "Win a free iPhone! Click here now!"]).unwrap();

    assert!(output.starts_with("SPAM (92.0% confidence)"));
    assert!(output.contains("Spam keywords: free, win, click here"));
}

#[test]
fn test_classify_explain() {
    let output = run_args(&["classify", "--explain", "Meeting at 3pm tomorrow"]).unwrap();

    assert!(output.starts_with("HAM (99.0% confidence)"));
    assert!(output.contains("Scores: spam 0.0, ham 5.0"));
    assert!(output.contains("Ham keywords: meeting, tomorrow"));
    assert!(output.contains("Signals: none"));
}

#[test]
fn test_classify_json() {
    let output = run_args(&["classify", "--json", "   "]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["label"], "ham");
    assert_eq!(json["confidence"], 0.5);
    assert_eq!(json["matched_keywords"], serde_json::json!([]));
}

#[test]
fn test_classify_examples() {
    let output = run_args(&["classify", "--example", "1"]).unwrap();
    assert!(output.starts_with("SPAM (92.0% confidence)"));
    assert!(output.contains("Spam keywords: free, claim, congratulations, reply"));

    let output = run_args(&["classify", "--json", "--example", "3"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["message"], "URGENT!! Your account has been blocked. Call 12345 now.");
    assert_eq!(json["label"], "spam");
    assert_eq!(json["confidence"], 0.94);

    for number in ["2", "4"] {
        let output = run_args(&["classify", "--example", number]).unwrap();
        assert!(output.starts_with("HAM (99.0% confidence)"));
    }
}

#[test]
fn test_sample_batch() {
    let output = run_args(&["batch", "--sample"]).unwrap();

    assert!(output.contains("Processed 5 messages: 3 spam, 2 ham"));
    assert!(output.contains("Meeting at 3pm tomorrow"));
}

#[test]
fn test_batch_from_file_parallel_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "URGENT: Your account will be suspended\n\n  \nThanks for lunch today").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_args(&["batch", "--parallel", "--json", "--file", path]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["results"][0]["label"], "spam");
    assert_eq!(json["results"][1]["index"], 2);
    assert_eq!(json["results"][1]["message"], "Thanks for lunch today");
}

#[test]
fn test_batch_crlf_lines_keep_trailing_return() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "win it big there\r\n\r\nsee you at home\r\n").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_args(&["batch", "--json", "--file", path]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    // The carriage return leaves an empty fifth token, so no short-message bonus.
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["results"][0]["message"], "win it big there\r");
    assert_eq!(json["results"][0]["label"], "spam");
    assert_eq!(json["results"][0]["confidence"], 0.99);
    assert_eq!(json["results"][1]["label"], "ham");
}

#[test]
fn test_batch_without_messages_fails() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let err = run_args(&["batch", "--file", path]).unwrap_err();
    assert_eq!(err.to_string(), "no messages entered");
}

#[test]
fn test_dataset_filter() {
    let output = run_args(&["dataset", "--label", "ham"]).unwrap();

    assert!(output.starts_with("Total: 67  Spam: 57 (85.1%)  Ham: 10 (14.9%)"));
    assert!(output.contains("[ham ] Love you! See you soon."));
    assert!(!output.contains("[spam]"));
}

#[test]
fn test_metrics_json_is_verbatim() {
    let output = run_args(&["metrics", "--json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["accuracy"], 0.986);
    assert_eq!(json["confusionMatrix"]["falseNegative"], 4);
    assert_eq!(json["hamSamples"], 900);
}

#[test]
fn test_compare_reports_agreement() {
    let output = run_args(&["compare"]).unwrap();

    assert!(output.contains("Agreement: 58/67"));
    assert!(output.contains("(mismatch)"));
}

#[test]
fn test_config_file_changes_behavior() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "evidence_limit: 1").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_args(&["classify", "--json", "-c", path, "free cash prize"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["matched_keywords"], serde_json::json!(["free"]));
}

#[test]
fn test_invalid_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "confidence:\n  cap: 2.0").unwrap();
    let path = file.path().to_str().unwrap();

    assert!(run_args(&["classify", "-c", path, "hello"]).is_err());
}
