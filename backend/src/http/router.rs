//! Router configuration for the HTTP server.
//!
//! Sets up the page routes, the versioned JSON API and middleware (CORS,
//! compression, tracing, body limit).

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::ServerSettings;

/// Create the application router with default settings.
pub fn create_router(state: AppState) -> Router {
    create_router_with_settings(state, &ServerSettings::default())
}

/// Create the application router with all routes and middleware.
pub fn create_router_with_settings(state: AppState, settings: &ServerSettings) -> Router {
    // The JSON API may be called from other origins; pages are same-origin anyway
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/lunar-phase", post(handlers::lunar_phase))
        .route("/planet-positions", post(handlers::planet_positions));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/lunar", get(handlers::lunar_form))
        .route("/planet", get(handlers::planet_form))
        .route("/calculate_lunar_phase", post(handlers::calculate_lunar_phase))
        .route(
            "/calculate_planet_positions",
            post(handlers::calculate_planet_positions),
        )
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(settings.request_body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
