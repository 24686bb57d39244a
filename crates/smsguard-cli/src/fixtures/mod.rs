//! Fixed reference data displayed alongside live classification

pub mod dataset;
pub mod metrics;

pub use dataset::{filter_by_label, DatasetStats, SAMPLE_DATASET};
pub use metrics::{ConfusionMatrix, ModelMetrics, PerClass, MODEL_METRICS};
