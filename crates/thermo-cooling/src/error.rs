//! Error types for the cooling adapter.

use thiserror::Error;

/// Result type alias for cooling adapter operations.
pub type CoolingResult<T> = Result<T, CoolingError>;

/// Errors that can occur while starting the cooling optimizer.
///
/// All of these are fatal configuration errors; once a rule base is
/// loaded, `optimize` itself has no error path — missing request fields
/// are resolved by defaults.
#[derive(Debug, Error)]
pub enum CoolingError {
    #[error("rule configuration error: {0}")]
    Rules(#[from] thermo_fuzzy::FuzzyError),
}
