//! Errors raised while turning raw form or JSON input into domain values.

use thiserror::Error;

/// Rejected user input. Blank fields are not errors; they are reported as an
/// "empty" response state by the HTTP layer before any parsing happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid date '{0}': expected YYYY-MM-DDTHH:MM")]
    InvalidDate(String),
    #[error("year {year} is outside the supported years {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("invalid {field} '{value}': expected a decimal number of degrees")]
    InvalidCoordinate { field: &'static str, value: String },
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
}
