//! Ephemeris collaborator.
//!
//! The calculators never do positional astronomy themselves: they ask an
//! [`Ephemeris`] for the Moon's illumination or a planet's position and only
//! classify and format what comes back. [`SiderustEphemeris`] is the
//! production implementation; tests substitute stubs with fixed outputs.

pub mod coordinates;
pub mod siderust_adapter;

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::GeographicLocation;

pub use coordinates::{Equatorial, Horizontal};
pub use siderust_adapter::SiderustEphemeris;

/// Result type for ephemeris operations
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Errors that can occur while computing body positions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    /// The instant could not be placed on the dynamical time scale
    #[error("cannot convert {instant} to terrestrial time: {reason}")]
    TimeConversion {
        instant: NaiveDateTime,
        reason: String,
    },

    /// Observer coordinates are not usable numbers
    #[error("observer coordinates must be finite (latitude {latitude}, longitude {longitude})")]
    InvalidObserver { latitude: f64, longitude: f64 },
}

/// The seven planets the planetary calculator reports, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Fixed output order of the planetary table.
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a planet as seen by one observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Geocentric astrometric right ascension / declination, mean J2000 equator
    pub equatorial: Equatorial,
    /// Apparent topocentric azimuth (from north, eastward) and elevation
    pub horizontal: Horizontal,
    /// Earth-planet distance in astronomical units
    pub distance_au: f64,
}

/// Capability interface over the actual ephemeris math.
///
/// Implementations must be pure with respect to their inputs: no caching of
/// results between calls and no shared mutable state.
pub trait Ephemeris: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;

    /// Percentage (0-100) of the Moon's visible disk lit by the Sun.
    fn moon_illumination(&self, instant: &NaiveDateTime) -> EphemerisResult<f64>;

    /// Equatorial and horizontal position of `planet` for `observer` at `instant`.
    fn planet_position(
        &self,
        planet: Planet,
        instant: &NaiveDateTime,
        observer: &GeographicLocation,
    ) -> EphemerisResult<PlanetPosition>;
}
