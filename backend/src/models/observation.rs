use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time::{format_long_date, parse_instant};
use super::InputError;

/// Geographic location of an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), east positive
    pub longitude: f64,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InputError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse the raw `latitude` / `longitude` form fields.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InputError> {
        let lat = parse_degrees("latitude", latitude)?;
        let lon = parse_degrees("longitude", longitude)?;
        Self::new(lat, lon)
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidCoordinate {
            field,
            value: trimmed.to_string(),
        })
}

/// A single calculator query: when, and (for planets) from where.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRequest {
    pub instant: NaiveDateTime,
    pub observer: Option<GeographicLocation>,
}

impl ObservationRequest {
    pub fn lunar(instant: NaiveDateTime) -> Self {
        Self {
            instant,
            observer: None,
        }
    }

    pub fn planetary(instant: NaiveDateTime, observer: GeographicLocation) -> Self {
        Self {
            instant,
            observer: Some(observer),
        }
    }

    /// Build a lunar request from the raw `date` field.
    pub fn parse_lunar(date: &str) -> Result<Self, InputError> {
        Ok(Self::lunar(parse_instant(date)?))
    }

    /// Build a planetary request from the raw `date`, `latitude` and `longitude` fields.
    pub fn parse_planetary(date: &str, latitude: &str, longitude: &str) -> Result<Self, InputError> {
        let instant = parse_instant(date)?;
        let observer = GeographicLocation::parse(latitude, longitude)?;
        Ok(Self::planetary(instant, observer))
    }

    pub fn formatted_date(&self) -> String {
        format_long_date(&self.instant)
    }
}
