//! Error types for choice resolution

use thiserror::Error;

/// Result type for choice operations
pub type Result<T> = std::result::Result<T, ChoicesError>;

/// Errors that can occur while resolving or aggregating choices
#[derive(Debug, Error)]
pub enum ChoicesError {
    /// Color selection key with no corresponding option text
    #[error("no option text for color value: {key}")]
    UnknownColor { key: String },

    /// Non-numeric entry fed to an aggregation
    #[error("entry is not numeric: {text}")]
    NonNumeric { text: String },

    /// Aggregation over an empty choice set
    #[error("cannot aggregate an empty choice set")]
    Empty,

    /// Provider cannot resolve this kind of option source
    #[error("option source cannot be resolved: {kind}")]
    UnresolvedSource { kind: &'static str },
}
