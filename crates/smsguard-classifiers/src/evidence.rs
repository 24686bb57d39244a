//! Keyword evidence attached to predictions

/// Maximum number of spam terms reported per prediction
pub const EVIDENCE_LIMIT: usize = 5;

/// Keep the first `limit` spam terms, preserving lexicon order.
///
/// Evidence is reported for ham predictions too, so callers can see spam
/// terms that were outweighed.
pub fn select_evidence(spam_matches: &[&str], limit: usize) -> Vec<String> {
    spam_matches
        .iter()
        .take(limit)
        .map(|term| term.to_string())
        .collect()
}
