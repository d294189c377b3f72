//! Planetary position calculator.
//!
//! For every planet in [`Planet::ALL`] order, collects the equatorial and
//! horizontal position from the ephemeris and reshapes it into the record the
//! result table displays.

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;

use super::error::{CalculationError, CalculationResult};
use super::round_to_places;
use crate::ephemeris::coordinates::normalize_azimuth;
use crate::ephemeris::{Ephemeris, Planet, PlanetPosition};
use crate::models::{GeographicLocation, ObservationRequest};

/// Decimal places kept on right ascension seconds.
pub const RA_SECONDS_DECIMALS: i32 = 2;

/// Right ascension split into sexagesimal hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RightAscension {
    pub hours: u32,
    pub minutes: u32,
    /// Rounded to [`RA_SECONDS_DECIMALS`] places, always below 60
    pub seconds: f64,
}

impl RightAscension {
    /// Decompose a right ascension given in hours of time.
    ///
    /// Seconds that round up to 60 carry into the minutes (and hours), so
    /// 5h 59m 59.999s becomes 6h 0m 0.00s.
    pub fn from_hours(hours: f64) -> Self {
        let total = hours.rem_euclid(24.0);
        let mut h = total.trunc() as u32;
        let minutes_f = (total - total.trunc()) * 60.0;
        let mut m = minutes_f.trunc() as u32;
        let mut s = round_to_places((minutes_f - minutes_f.trunc()) * 60.0, RA_SECONDS_DECIMALS);

        if s >= 60.0 {
            s -= 60.0;
            m += 1;
        }
        if m >= 60 {
            m -= 60;
            h += 1;
        }
        if h >= 24 {
            h -= 24;
        }

        Self {
            hours: h,
            minutes: m,
            seconds: s,
        }
    }

    pub fn hours_label(&self) -> String {
        format!("{}h", self.hours)
    }

    pub fn minutes_label(&self) -> String {
        format!("{}mins", self.minutes)
    }

    pub fn seconds_label(&self) -> String {
        format!("{:.2}s", self.seconds)
    }
}

/// One row of the planetary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionRecord {
    /// Degrees east of north, `[0, 360)`
    pub azimuth_deg: f64,
    /// Degrees above the horizon, `[-90, 90]`
    pub elevation_deg: f64,
    pub right_ascension: RightAscension,
    pub declination_deg: f64,
}

impl PositionRecord {
    pub fn from_position(position: &PlanetPosition) -> Self {
        Self {
            azimuth_deg: normalize_azimuth(position.horizontal.azimuth).value(),
            elevation_deg: position.horizontal.elevation.value().clamp(-90.0, 90.0),
            right_ascension: RightAscension::from_hours(position.equatorial.ra_hours()),
            declination_deg: position.equatorial.dec.value(),
        }
    }
}

/// Planetary calculator output for one request, in fixed planet order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryResult {
    pub instant: NaiveDateTime,
    pub observer: GeographicLocation,
    pub formatted_date: String,
    pub positions: Vec<(Planet, PositionRecord)>,
}

impl PlanetaryResult {
    pub fn iter(&self) -> impl Iterator<Item = &(Planet, PositionRecord)> {
        self.positions.iter()
    }
}

/// Compute the position table for `request`, which must carry an observer.
pub fn compute_planetary_positions(
    ephemeris: &dyn Ephemeris,
    request: &ObservationRequest,
) -> CalculationResult<PlanetaryResult> {
    let observer = request.observer.ok_or(CalculationError::MissingObserver)?;

    let positions = Planet::ALL
        .iter()
        .map(|&planet| -> CalculationResult<(Planet, PositionRecord)> {
            let position = ephemeris.planet_position(planet, &request.instant, &observer)?;
            Ok((planet, PositionRecord::from_position(&position)))
        })
        .collect::<CalculationResult<Vec<_>>>()?;

    debug!(
        "computed {} planet positions at {} for lat={} lon={}",
        positions.len(),
        request.instant,
        observer.latitude,
        observer.longitude
    );

    Ok(PlanetaryResult {
        instant: request.instant,
        observer,
        formatted_date: request.formatted_date(),
        positions,
    })
}
