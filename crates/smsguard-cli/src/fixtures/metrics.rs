//! Published evaluation figures of the reference model.
//!
//! These numbers describe a separately trained model and are shown for
//! comparison. They are constants and must not be recomputed from this
//! crate's classifier.

use serde::Serialize;

/// A figure reported per class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerClass {
    pub ham: f64,
    pub spam: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
    /// Spam classified as spam
    pub true_positive: u32,
    /// Ham classified as ham
    pub true_negative: u32,
    /// Ham classified as spam
    pub false_positive: u32,
    /// Spam classified as ham
    pub false_negative: u32,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u32 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: PerClass,
    pub recall: PerClass,
    pub f1_score: PerClass,
    pub confusion_matrix: ConfusionMatrix,
    pub total_samples: u32,
    pub spam_samples: u32,
    pub ham_samples: u32,
}

pub const MODEL_METRICS: ModelMetrics = ModelMetrics {
    accuracy: 0.986,
    precision: PerClass {
        ham: 0.99,
        spam: 0.95,
    },
    recall: PerClass {
        ham: 0.98,
        spam: 0.97,
    },
    f1_score: PerClass {
        ham: 0.99,
        spam: 0.96,
    },
    confusion_matrix: ConfusionMatrix {
        true_positive: 146,
        true_negative: 887,
        false_positive: 13,
        false_negative: 4,
    },
    total_samples: 1050,
    spam_samples: 150,
    ham_samples: 900,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_values() {
        let m = MODEL_METRICS;
        assert_eq!(m.accuracy, 0.986);
        assert_eq!(m.precision, PerClass { ham: 0.99, spam: 0.95 });
        assert_eq!(m.recall, PerClass { ham: 0.98, spam: 0.97 });
        assert_eq!(m.f1_score, PerClass { ham: 0.99, spam: 0.96 });
        assert_eq!(m.spam_samples + m.ham_samples, m.total_samples);
        assert_eq!(m.confusion_matrix.total(), m.total_samples);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(MODEL_METRICS).unwrap();
        assert_eq!(json["f1Score"]["spam"], 0.96);
        assert_eq!(json["confusionMatrix"]["truePositive"], 146);
        assert_eq!(json["totalSamples"], 1050);
    }
}
