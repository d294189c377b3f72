//! HTTP handlers.
//!
//! Form handlers render HTML and report input problems on the form itself.
//! JSON handlers under `/v1` report them as [`ApiError`](super::error::ApiError)
//! bodies. Both delegate to the service layer on a blocking thread.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::{debug, info};

use super::dto::{
    HealthResponse, LunarForm, LunarPhaseRequest, LunarPhaseResponse, PlanetForm,
    PlanetPositionsRequest, PlanetPositionsResponse,
};
use super::error::{AppError, PageError};
use super::state::AppState;
use super::views::{self, FormState};
use crate::models::{parse_instant, GeographicLocation, ObservationRequest};
use crate::services::{self, CalculationResult, LunarResult, PlanetaryResult};

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for page handlers.
pub type PageResult = Result<(StatusCode, Html<String>), PageError>;

/// Run a service call off the async runtime.
async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> CalculationResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::from)
}

async fn lunar_result(
    state: &AppState,
    request: ObservationRequest,
) -> Result<LunarResult, AppError> {
    let ephemeris = state.ephemeris.clone();
    run_blocking(move || services::compute_lunar_result(ephemeris.as_ref(), &request)).await
}

async fn planetary_result(
    state: &AppState,
    request: ObservationRequest,
) -> Result<PlanetaryResult, AppError> {
    let ephemeris = state.ephemeris.clone();
    run_blocking(move || services::compute_planetary_positions(ephemeris.as_ref(), &request)).await
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ephemeris: state.ephemeris.name().to_string(),
    }))
}

// =============================================================================
// Pages
// =============================================================================

/// GET /
pub async fn landing() -> Html<String> {
    Html(views::landing_page())
}

/// GET /lunar
pub async fn lunar_form() -> Html<String> {
    Html(views::lunar_page(&FormState::Blank))
}

/// GET /planet
pub async fn planet_form() -> Html<String> {
    Html(views::planet_page(&FormState::Blank))
}

/// POST /calculate_lunar_phase
///
/// A blank date re-renders the form with the "empty" notice. An unparseable
/// date re-renders it with the parse error and status 400.
pub async fn calculate_lunar_phase(
    State(state): State<AppState>,
    Form(form): Form<LunarForm>,
) -> PageResult {
    if form.is_blank() {
        debug!("lunar form submitted without a date");
        return Ok((StatusCode::OK, Html(views::lunar_page(&FormState::Empty))));
    }

    let request = match ObservationRequest::parse_lunar(form.date()) {
        Ok(request) => request,
        Err(e) => {
            info!("rejected lunar form: {}", e);
            let page = views::lunar_page(&FormState::Invalid(e.to_string()));
            return Ok((StatusCode::BAD_REQUEST, Html(page)));
        }
    };

    let result = lunar_result(&state, request).await?;
    Ok((StatusCode::OK, Html(views::lunar_page(&FormState::Result(result)))))
}

/// POST /calculate_planet_positions
///
/// Same blank and invalid handling as the lunar form, over all three fields.
pub async fn calculate_planet_positions(
    State(state): State<AppState>,
    Form(form): Form<PlanetForm>,
) -> PageResult {
    if form.is_blank() {
        debug!("planet form submitted with a blank field");
        return Ok((StatusCode::OK, Html(views::planet_page(&FormState::Empty))));
    }

    let request =
        match ObservationRequest::parse_planetary(form.date(), form.latitude(), form.longitude()) {
            Ok(request) => request,
            Err(e) => {
                info!("rejected planet form: {}", e);
                let page = views::planet_page(&FormState::Invalid(e.to_string()));
                return Ok((StatusCode::BAD_REQUEST, Html(page)));
            }
        };

    let result = planetary_result(&state, request).await?;
    Ok((StatusCode::OK, Html(views::planet_page(&FormState::Result(result)))))
}

// =============================================================================
// JSON API
// =============================================================================

/// POST /v1/lunar-phase
pub async fn lunar_phase(
    State(state): State<AppState>,
    Json(body): Json<LunarPhaseRequest>,
) -> HandlerResult<LunarPhaseResponse> {
    if body.date.trim().is_empty() {
        return Err(AppError::EmptyInput("date is required".to_string()));
    }
    let request = ObservationRequest::parse_lunar(&body.date)?;
    let result = lunar_result(&state, request).await?;
    Ok(Json(result.into()))
}

/// POST /v1/planet-positions
pub async fn planet_positions(
    State(state): State<AppState>,
    Json(body): Json<PlanetPositionsRequest>,
) -> HandlerResult<PlanetPositionsResponse> {
    let (latitude, longitude) = match (body.latitude, body.longitude) {
        (Some(lat), Some(lon)) if !body.date.trim().is_empty() => (lat, lon),
        _ => {
            return Err(AppError::EmptyInput(
                "date, latitude and longitude are required".to_string(),
            ))
        }
    };

    let instant = parse_instant(&body.date)?;
    let observer = GeographicLocation::new(latitude, longitude)?;
    let request = ObservationRequest::planetary(instant, observer);

    let result = planetary_result(&state, request).await?;
    Ok(Json(result.into()))
}
