//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::views;
use crate::ephemeris::EphemerisError;
use crate::models::InputError;
use crate::services::CalculationError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// A required field was blank or missing
    EmptyInput(String),
    /// A field was present but unparseable or out of range
    InvalidInput(String),
    /// The ephemeris could not answer
    Ephemeris(EphemerisError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ApiError) {
        match self {
            AppError::EmptyInput(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("EMPTY_INPUT", msg.clone()),
            ),
            AppError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_INPUT", msg.clone()),
            ),
            AppError::Ephemeris(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("EPHEMERIS_ERROR", "Position calculation failed")
                    .with_details(e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg.clone()),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            error!("request failed: {:?}", self);
        }
        (status, Json(body)).into_response()
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::Ephemeris(e) => AppError::Ephemeris(e),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// [`AppError`] rendered as an HTML page for the form endpoints.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = self.0.status_and_body();
        if status.is_server_error() {
            error!("page request failed: {:?}", self.0);
        }
        (status, Html(views::error_page(status, &body))).into_response()
    }
}

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl From<CalculationError> for PageError {
    fn from(err: CalculationError) -> Self {
        PageError(AppError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_input_error_maps_to_bad_request() {
        let err = AppError::from(InputError::LatitudeOutOfRange(91.0));
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_INPUT");
    }

    #[test]
    fn test_unsupported_year_maps_to_bad_request() {
        let err = AppError::from(InputError::YearOutOfRange {
            year: 900,
            min: 1000,
            max: 3000,
        });
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_INPUT");
        assert!(body.message.contains("900"));
    }

    #[test]
    fn test_ephemeris_error_maps_to_server_error() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = AppError::from(CalculationError::Ephemeris(EphemerisError::TimeConversion {
            instant,
            reason: "leap second".to_string(),
        }));
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "EPHEMERIS_ERROR");
        assert!(body.details.is_some());
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let json = serde_json::to_string(&ApiError::new("EMPTY_INPUT", "date is required")).unwrap();
        assert!(!json.contains("details"));
    }
}
