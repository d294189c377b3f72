//! Service layer for the two calculators.
//!
//! Services sit between the HTTP handlers and the ephemeris collaborator. They
//! take an already-validated [`crate::models::ObservationRequest`], call the
//! ephemeris, and shape the answer. Nothing here is shared between requests.

pub mod error;
pub mod lunar_phase;
pub mod planet_positions;

pub use error::{CalculationError, CalculationResult};
pub use lunar_phase::{classify_phase, compute_lunar_result, LunarResult, PhaseName};
pub use planet_positions::{
    compute_planetary_positions, PlanetaryResult, PositionRecord, RightAscension,
};

/// Round half away from zero to `places` decimal places.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
