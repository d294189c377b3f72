//! Error type shared by the calculator services.

use thiserror::Error;

use crate::ephemeris::EphemerisError;

/// Result type for calculator operations
pub type CalculationResult<T> = Result<T, CalculationError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// Planetary positions were requested without an observer location
    #[error("planetary positions require an observer location")]
    MissingObserver,

    /// The ephemeris collaborator failed
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
