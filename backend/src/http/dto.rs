//! Data Transfer Objects for the HTTP layer.
//!
//! Form bodies keep every field as an optional string so blank and missing
//! fields can be told apart from malformed ones. JSON bodies use native types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::GeographicLocation;
use crate::services::{LunarResult, PhaseName, PlanetaryResult, RightAscension};

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// `POST /calculate_lunar_phase` form body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LunarForm {
    #[serde(default)]
    pub date: Option<String>,
}

impl LunarForm {
    pub fn is_blank(&self) -> bool {
        is_blank(&self.date)
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }
}

/// `POST /calculate_planet_positions` form body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetForm {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl PlanetForm {
    /// True when any of the three fields is blank.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.date) || is_blank(&self.latitude) || is_blank(&self.longitude)
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn latitude(&self) -> &str {
        self.latitude.as_deref().unwrap_or_default()
    }

    pub fn longitude(&self) -> &str {
        self.longitude.as_deref().unwrap_or_default()
    }
}

/// `POST /v1/lunar-phase` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunarPhaseRequest {
    #[serde(default)]
    pub date: String,
}

/// `POST /v1/planet-positions` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPositionsRequest {
    #[serde(default)]
    pub date: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the ephemeris answering requests
    pub ephemeris: String,
}

/// Lunar calculator response.
#[derive(Debug, Clone, Serialize)]
pub struct LunarPhaseResponse {
    pub date: NaiveDateTime,
    pub formatted_date: String,
    /// Percent illuminated, three decimals
    pub illumination: f64,
    /// `null` when no phase rule matched
    pub phase: Option<PhaseName>,
}

impl From<LunarResult> for LunarPhaseResponse {
    fn from(result: LunarResult) -> Self {
        Self {
            date: result.instant,
            formatted_date: result.formatted_date,
            illumination: result.illumination,
            phase: result.phase,
        }
    }
}

/// One planet in the planetary response.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetPositionDto {
    pub name: &'static str,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub right_ascension: RightAscension,
    pub declination_deg: f64,
}

/// Planetary calculator response; `planets` is in Mercury to Neptune order.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetPositionsResponse {
    pub date: NaiveDateTime,
    pub formatted_date: String,
    pub observer: GeographicLocation,
    pub planets: Vec<PlanetPositionDto>,
}

impl From<PlanetaryResult> for PlanetPositionsResponse {
    fn from(result: PlanetaryResult) -> Self {
        let planets = result
            .positions
            .iter()
            .map(|(planet, record)| PlanetPositionDto {
                name: planet.name(),
                azimuth_deg: record.azimuth_deg,
                elevation_deg: record.elevation_deg,
                right_ascension: record.right_ascension,
                declination_deg: record.declination_deg,
            })
            .collect();

        Self {
            date: result.instant,
            formatted_date: result.formatted_date,
            observer: result.observer,
            planets,
        }
    }
}
