//! Batch input handling

use smsguard_classifiers::is_message_whitespace;
use smsguard_core::Result;
use std::io::Read;
use std::path::Path;

/// Messages loaded by `batch --sample`
pub const SAMPLE_BATCH: &[&str] = &[
    "Win a free iPhone! Click here now!",
    "Meeting at 3pm tomorrow",
    "URGENT: Your account will be suspended",
    "Thanks for lunch today",
    "Claim your prize of $1000 immediately",
];

/// Messages offered by `classify --example N`, numbered from 1
pub const EXAMPLE_MESSAGES: &[&str] = &[
    "Congratulations! You've won a free ticket. Reply YES to claim.",
    "Hey, are you coming to the meeting tomorrow?",
    "URGENT!! Your account has been blocked. Call 12345 now.",
    "Please pick up groceries on way home.",
];

/// Look up a built-in example by its 1-based number
pub fn example_message(number: u64) -> Option<&'static str> {
    let index = usize::try_from(number.checked_sub(1)?).ok()?;
    EXAMPLE_MESSAGES.get(index).copied()
}

/// Split text into one message per line, skipping blank lines.
///
/// Surviving lines are kept exactly as written.
pub fn parse_batch_input(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.chars().all(is_message_whitespace))
        .map(str::to_string)
        .collect()
}

/// Read messages from `path`, or from stdin when no path is given
pub fn read_batch(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(parse_batch_input(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_lines_dropped() {
        let messages = parse_batch_input("first\n\n   \nsecond\n\t\n\u{FEFF}\r\n");
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_lines_kept_verbatim() {
        let messages = parse_batch_input("  padded  \r\nnext");
        assert_eq!(messages, vec!["  padded  \r", "next"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_batch_input("").is_empty());
        assert!(parse_batch_input("\n \n").is_empty());
    }

    #[test]
    fn test_sample_batch_round_trips() {
        assert_eq!(parse_batch_input(&SAMPLE_BATCH.join("\n")), SAMPLE_BATCH);
    }

    #[test]
    fn test_example_numbering() {
        assert_eq!(example_message(1), Some(EXAMPLE_MESSAGES[0]));
        assert_eq!(example_message(4), Some("Please pick up groceries on way home."));
        assert_eq!(example_message(0), None);
        assert_eq!(example_message(5), None);
    }

    #[test]
    fn test_read_batch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\n\ntwo\n").unwrap();

        let messages = read_batch(Some(file.path())).unwrap();
        assert_eq!(messages, vec!["one", "two"]);
    }
}
