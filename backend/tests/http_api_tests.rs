//! Functional tests for the JSON API and health endpoint.

mod support;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use skycalc::http::{create_router, AppState};
use support::{FailingEphemeris, FixedEphemeris};

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    call(app, request).await
}

fn fixed_app(illumination: f64) -> Router {
    create_router(AppState::new(FixedEphemeris::shared(illumination)))
}

#[tokio::test]
async fn test_health_reports_ephemeris() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = call(fixed_app(0.0), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ephemeris"], "fixed");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_lunar_phase_json() {
    let (status, body) = post_json(
        fixed_app(75.123_456),
        "/v1/lunar-phase",
        json!({ "date": "2024-01-25T17:54" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["illumination"], 75.123);
    assert_eq!(body["phase"], "Waxing/Waning Gibbous");
    assert_eq!(body["formatted_date"], "Thursday, 25 January, 2024");
    assert_eq!(body["date"], "2024-01-25T17:54:00");
}

#[tokio::test]
async fn test_lunar_phase_unclassified_is_null() {
    let (status, body) =
        post_json(fixed_app(49.6), "/v1/lunar-phase", json!({ "date": "2024-01-18T03:00" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["phase"].is_null());
}

#[tokio::test]
async fn test_lunar_phase_empty_and_invalid_input() {
    let (status, body) = post_json(fixed_app(0.0), "/v1/lunar-phase", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_INPUT");

    let (status, body) =
        post_json(fixed_app(0.0), "/v1/lunar-phase", json!({ "date": "tomorrow" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_planet_positions_json() {
    let (status, body) = post_json(
        fixed_app(0.0),
        "/v1/planet-positions",
        json!({ "date": "2024-01-25T17:54", "latitude": 51.4779, "longitude": -0.0015 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["observer"]["latitude"], 51.4779);

    let planets = body["planets"].as_array().unwrap();
    let names: Vec<&str> = planets.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );

    let mars = &planets[2];
    assert_eq!(mars["right_ascension"]["hours"], 7);
    assert_eq!(mars["right_ascension"]["minutes"], 32);
    assert_eq!(mars["right_ascension"]["seconds"], 15.0);
    assert_eq!(mars["azimuth_deg"], 30.0);
    assert_eq!(mars["elevation_deg"], 0.0);
    assert_eq!(mars["declination_deg"], -10.5);
}

#[tokio::test]
async fn test_planet_positions_missing_and_out_of_range() {
    let (status, body) = post_json(
        fixed_app(0.0),
        "/v1/planet-positions",
        json!({ "date": "2024-01-25T17:54", "latitude": 10.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_INPUT");

    let (status, body) = post_json(
        fixed_app(0.0),
        "/v1/planet-positions",
        json!({ "date": "2024-01-25T17:54", "latitude": -90.5, "longitude": 0.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_ephemeris_failure_is_server_error() {
    let app = create_router(AppState::new(Arc::new(FailingEphemeris)));
    let (status, body) =
        post_json(app, "/v1/lunar-phase", json!({ "date": "2024-01-25T17:54" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "EPHEMERIS_ERROR");
    assert!(body["details"].as_str().unwrap().contains("terrestrial time"));
}

#[tokio::test]
async fn test_siderust_full_moon_end_to_end() {
    let app = create_router(AppState::siderust());
    let (status, body) =
        post_json(app, "/v1/lunar-phase", json!({ "date": "2024-01-25T17:54" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "Full Moon");
    assert!(body["illumination"].as_f64().unwrap() > 99.5);
}

#[tokio::test]
async fn test_year_outside_supported_range_is_invalid_input() {
    let app = create_router(AppState::siderust());
    let (status, body) =
        post_json(app, "/v1/lunar-phase", json!({ "date": "0900-06-01T00:00" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["message"].as_str().unwrap().contains("900"));
}

#[tokio::test]
async fn test_planet_positions_year_outside_supported_range() {
    let app = create_router(AppState::siderust());
    let (status, body) = post_json(
        app,
        "/v1/planet-positions",
        json!({ "date": "3001-01-01T00:00", "latitude": 0.0, "longitude": 0.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}
