//! Error types for the fuzzy-logic core.

use thiserror::Error;

/// Result type alias for fuzzy-core operations.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

/// Errors that can occur while building or loading a rule base.
///
/// All of these are configuration errors: they surface at construction
/// or load time, never during inference.
#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("invalid membership function: {0}")]
    Membership(String),

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("unknown term '{term}' on variable '{variable}'")]
    UnknownTerm { variable: String, term: String },

    #[error("duplicate variable: {0}")]
    DuplicateVariable(String),

    #[error("duplicate term '{term}' on variable '{variable}'")]
    DuplicateTerm { variable: String, term: String },

    #[error("reserved term name '{0}' may not be declared")]
    ReservedTerm(String),

    #[error("rule {index}: {detail}")]
    InvalidRule { index: usize, detail: String },

    #[error("unknown output term: {0}")]
    UnknownOutput(String),

    #[error("invalid output levels: {0}")]
    InvalidOutput(String),

    #[error("invalid label bands: {0}")]
    InvalidBands(String),

    #[error("failed to read rule file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write rule file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse rule file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("failed to serialize rule base: {0}")]
    Serialize(#[from] toml::ser::Error),
}
