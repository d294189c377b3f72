//! [`Ephemeris`] implementation backed by the `siderust` crate.
//!
//! This module is the bridge between the calculators' plain types and
//! siderust's typed coordinates. It handles:
//!
//! - Instant conversion: naive UTC `NaiveDateTime` -> TT `JulianDate`
//! - Observer conversion: `GeographicLocation` -> `Geodetic<ECEF>` (sea level)
//! - Body selection: `Planet` -> the matching VSOP87 body
//! - Angle conversion: siderust degrees -> `qtty::Degrees`
//!
//! The Moon comes from ELP2000 and the Sun and planets from VSOP87. Horizontal
//! coordinates are apparent and topocentric (IAU 2006 precession and
//! nutation, GAST) without refraction.

use chrono::NaiveDateTime;
use log::debug;
use siderust::bodies::solar_system;
use siderust::coordinates::cartesian;
use siderust::coordinates::centers::{Geocentric, Geodetic};
use siderust::coordinates::frames::{self, ECEF};
use siderust::coordinates::transform::Transform;
use siderust::ephemeris::{Vsop87Ephemeris, VSOP87};
use siderust::event::horizontal::{
    equatorial_to_horizontal, geocentric_j2000_to_apparent_topocentric,
};
use siderust::event::lunar::phase::moon_phase_geocentric;
use siderust::qtty::{AstronomicalUnit, Degrees, Meter, Quantity};
use siderust::time::{JulianDate, TimeContext};

use super::coordinates::{Equatorial, Horizontal};
use super::{Ephemeris, EphemerisError, EphemerisResult, Planet, PlanetPosition};
use crate::models::GeographicLocation;

/// Ephemeris over siderust's VSOP87 and ELP2000 theories.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiderustEphemeris;

impl SiderustEphemeris {
    pub fn new() -> Self {
        Self
    }
}

/// Convert a naive UTC instant to a TT Julian Date.
///
/// UTC is only defined from 1961 on; earlier instants are extrapolated from
/// the first UTC segment instead of being refused.
fn to_julian_date(instant: &NaiveDateTime) -> EphemerisResult<JulianDate> {
    let context = TimeContext::new().allow_pre_definition_utc();
    JulianDate::try_from_chrono_with(instant.and_utc(), &context).map_err(|err| {
        EphemerisError::TimeConversion {
            instant: *instant,
            reason: err.to_string(),
        }
    })
}

/// Convert a `GeographicLocation` to a siderust observing site.
fn to_site(observer: &GeographicLocation) -> EphemerisResult<Geodetic<ECEF>> {
    if !observer.latitude.is_finite() || !observer.longitude.is_finite() {
        return Err(EphemerisError::InvalidObserver {
            latitude: observer.latitude,
            longitude: observer.longitude,
        });
    }
    Ok(Geodetic::<ECEF>::new(
        Degrees::new(observer.longitude), // lon first
        Degrees::new(observer.latitude),
        Quantity::<Meter>::new(0.0),
    ))
}

fn vsop87_body(planet: Planet) -> &'static dyn VSOP87 {
    match planet {
        Planet::Mercury => &solar_system::Mercury,
        Planet::Venus => &solar_system::Venus,
        Planet::Mars => &solar_system::Mars,
        Planet::Jupiter => &solar_system::Jupiter,
        Planet::Saturn => &solar_system::Saturn,
        Planet::Uranus => &solar_system::Uranus,
        Planet::Neptune => &solar_system::Neptune,
    }
}

fn to_degrees(angle: Degrees) -> qtty::Degrees {
    qtty::Degrees::new(angle.value())
}

impl Ephemeris for SiderustEphemeris {
    fn name(&self) -> &'static str {
        "siderust-vsop87"
    }

    fn moon_illumination(&self, instant: &NaiveDateTime) -> EphemerisResult<f64> {
        let jd = to_julian_date(instant)?;
        let geometry = moon_phase_geocentric::<Vsop87Ephemeris>(jd);
        let percent = geometry.illuminated_fraction.value() * 100.0;
        debug!(
            "moon at {}: phase angle {:.4} rad, waxing={}, illumination={:.4}%",
            instant,
            geometry.phase_angle.value(),
            geometry.waxing,
            percent
        );
        Ok(percent)
    }

    fn planet_position(
        &self,
        planet: Planet,
        instant: &NaiveDateTime,
        observer: &GeographicLocation,
    ) -> EphemerisResult<PlanetPosition> {
        let site = to_site(observer)?;
        let jd = to_julian_date(instant)?;

        let barycentric = vsop87_body(planet).vsop87e(jd);
        let geocentric: cartesian::Position<
            Geocentric,
            frames::EquatorialMeanJ2000,
            AstronomicalUnit,
        > = barycentric.transform(jd);
        let astrometric = geocentric.to_spherical();

        let topocentric = geocentric_j2000_to_apparent_topocentric(&geocentric, site, jd);
        let horizon = equatorial_to_horizontal(&topocentric, site, jd);

        debug!(
            "{} at {}: ra={:.4} dec={:.4} alt={:.4} az={:.4}",
            planet,
            instant,
            astrometric.ra().value(),
            astrometric.dec().value(),
            horizon.alt().value(),
            horizon.az().value()
        );

        Ok(PlanetPosition {
            planet,
            equatorial: Equatorial::new(
                to_degrees(astrometric.ra()),
                to_degrees(astrometric.dec()),
            ),
            horizontal: Horizontal {
                azimuth: to_degrees(horizon.az()),
                elevation: to_degrees(horizon.alt()),
            },
            distance_au: astrometric.distance.value(),
        })
    }
}
