//! Property tests for the classification contract

use proptest::prelude::*;
use smsguard_classifiers::lexicon::SPAM_TERMS;
use smsguard_classifiers::prelude::*;
use smsguard_classifiers::{decide, ConfidenceBounds, ScoreInputs, Scorer, SignalSet};

fn signal_set() -> impl Strategy<Value = SignalSet> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(exclamations, uppercase, digits, currency, url)| SignalSet {
            multiple_exclamations: exclamations,
            long_uppercase_run: uppercase,
            long_digit_run: digits,
            currency_symbol: currency,
            url_like: url,
        },
    )
}

fn score_inputs() -> impl Strategy<Value = ScoreInputs> {
    (0usize..20, 0usize..20, signal_set(), 0usize..40).prop_map(
        |(spam_hits, ham_hits, signals, token_count)| ScoreInputs {
            spam_hits,
            ham_hits,
            signals,
            token_count,
        },
    )
}

/// Text mixing spam terms, ham terms, signals and noise
fn sms_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        prop::sample::select(SPAM_TERMS.to_vec()).prop_map(str::to_string),
        prop::sample::select(vec!["meeting", "thanks", "no", "home", "love"])
            .prop_map(str::to_string),
        "[A-Za-z0-9!$£€₹ .]{0,12}",
        "\\PC{0,8}",
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    /// Property: every input yields a bounded prediction with capped, ordered evidence
    #[test]
    fn test_classification_is_total(text in prop_oneof![sms_text(), any::<String>()]) {
        let classifier = SpamClassifier::default();
        let result = classifier.classify(&text);

        prop_assert!((0.50..=0.99).contains(&result.confidence));
        prop_assert!(result.matched_keywords.len() <= 5);

        let positions: Vec<usize> = result
            .matched_keywords
            .iter()
            .map(|kw| SPAM_TERMS.iter().position(|term| term == kw))
            .collect::<Option<Vec<_>>>()
            .expect("evidence must come from the spam lexicon");
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: blank input always maps to the fallback prediction
    #[test]
    fn test_blank_input_fixed_point(text in "[ \t\r\n]{0,16}") {
        let result = SpamClassifier::default().classify(&text);
        prop_assert_eq!(result, Prediction::fallback());
    }

    /// Property: batch output equals element-wise classification
    #[test]
    fn test_batch_fidelity(messages in prop::collection::vec(sms_text(), 0..16)) {
        let classifier = SpamClassifier::default();

        let sequential = classify_batch(&classifier, &messages);
        let parallel = classify_batch_parallel(&classifier, &messages);

        prop_assert_eq!(sequential.len(), messages.len());
        prop_assert_eq!(&sequential, &parallel);
        for (message, prediction) in messages.iter().zip(&sequential) {
            prop_assert_eq!(&classifier.classify(message), prediction);
        }
    }

    /// Property: one more spam hit never lowers the spam score or flips spam to ham
    #[test]
    fn test_spam_evidence_is_monotonic(inputs in score_inputs()) {
        let scorer = Scorer::default();
        let bounds = ConfidenceBounds::default();

        let before = scorer.score(&inputs);
        let after = scorer.score(&ScoreInputs { spam_hits: inputs.spam_hits + 1, ..inputs });

        prop_assert!(after.spam >= before.spam);
        if decide(&before, &bounds).label == Label::Spam {
            prop_assert_eq!(decide(&after, &bounds).label, Label::Spam);
        }
    }

    /// Property: equal spam and ham scores always resolve to ham
    #[test]
    fn test_ties_resolve_to_ham(n in 0usize..10, token_count in 5usize..40) {
        // 3n spam hits at 2.0 balance 4n ham hits at 1.5.
        let inputs = ScoreInputs {
            spam_hits: 3 * n,
            ham_hits: 4 * n,
            signals: SignalSet::default(),
            token_count,
        };

        let scores = Scorer::default().score(&inputs);
        prop_assert_eq!(scores.spam, scores.ham);
        prop_assert_eq!(decide(&scores, &ConfidenceBounds::default()).label, Label::Ham);
    }

    /// Property: repeating a spam term already present changes nothing
    #[test]
    fn test_repeated_term_is_idempotent(index in 0..SPAM_TERMS.len()) {
        let classifier = SpamClassifier::default();
        let term = SPAM_TERMS[index];

        let once = format!("xx {term} yy zz qq");
        let twice = format!("xx {term}{term} zz qq");

        prop_assert_eq!(classifier.score(&once).spam, classifier.score(&twice).spam);
    }
}
