//! Error types for SMSGuard

/// Result type alias using SMSGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SMSGuard operations.
///
/// Classifying a message never fails; these variants cover building a
/// classifier, loading its configuration and parsing user-supplied labels.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Matcher construction errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A label other than `spam` or `ham`
    #[error("invalid label: {0:?} (expected \"spam\" or \"ham\")")]
    InvalidLabel(String),

    /// File IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
