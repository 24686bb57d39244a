//! SMSGuard Core
//!
//! Core types and utilities shared across SMSGuard components.
//!
//! This crate provides:
//! - The classification output contract (`Label`, `Prediction`)
//! - Labeled reference messages used by display/comparison tooling
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Label, LabeledMessage, Prediction};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Label, LabeledMessage, Prediction};
}
