//! Label decision and confidence mapping

use crate::scoring::ScorePair;
use serde::{Deserialize, Serialize};
use smsguard_core::Label;

/// Confidence floor; also the confidence of the empty-message result
pub const CONFIDENCE_BASE: f64 = 0.5;
/// Confidence never exceeds this
pub const CONFIDENCE_CAP: f64 = 0.99;

/// Range that confidence values are mapped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceBounds {
    pub base: f64,
    pub cap: f64,
}

impl Default for ConfidenceBounds {
    fn default() -> Self {
        Self {
            base: CONFIDENCE_BASE,
            cap: CONFIDENCE_CAP,
        }
    }
}

/// Label and confidence derived from a score pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub label: Label,
    pub confidence: f64,
}

/// Map scores to a label and a bounded confidence.
///
/// Spam wins only on a strictly higher score; ties go to ham.
pub fn decide(scores: &ScorePair, bounds: &ConfidenceBounds) -> Decision {
    let spam_probability = scores.spam_probability();

    let (label, support) = if scores.spam > scores.ham {
        (Label::Spam, spam_probability)
    } else {
        (Label::Ham, 1.0 - spam_probability)
    };

    let confidence = (bounds.base + support * (1.0 - bounds.base)).min(bounds.cap);

    Decision {
        label,
        confidence: round_to_hundredths(confidence),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
