#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use qtty::Degrees;

use skycalc::ephemeris::{
    Ephemeris, EphemerisError, EphemerisResult, Equatorial, Horizontal, Planet, PlanetPosition,
};
use skycalc::models::GeographicLocation;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Ephemeris returning fixed, planet-indexed values.
///
/// Planet `i` (in display order) sits at RA `83.0625 + 15 i` degrees
/// (5h 32m 15s plus `i` hours), declination `-12.5 + i`, azimuth `10 (i + 1)`
/// and elevation `5 i - 10`.
pub struct FixedEphemeris {
    pub illumination: f64,
}

impl FixedEphemeris {
    pub fn new(illumination: f64) -> Self {
        Self { illumination }
    }

    pub fn shared(illumination: f64) -> Arc<dyn Ephemeris> {
        Arc::new(Self::new(illumination))
    }
}

impl Ephemeris for FixedEphemeris {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn moon_illumination(&self, _instant: &NaiveDateTime) -> EphemerisResult<f64> {
        Ok(self.illumination)
    }

    fn planet_position(
        &self,
        planet: Planet,
        _instant: &NaiveDateTime,
        _observer: &GeographicLocation,
    ) -> EphemerisResult<PlanetPosition> {
        let i = Planet::ALL.iter().position(|p| *p == planet).unwrap_or(0) as f64;
        Ok(PlanetPosition {
            planet,
            equatorial: Equatorial::new(Degrees::new(83.0625 + 15.0 * i), Degrees::new(-12.5 + i)),
            horizontal: Horizontal {
                azimuth: Degrees::new(10.0 * (i + 1.0)),
                elevation: Degrees::new(5.0 * i - 10.0),
            },
            distance_au: 1.0 + i,
        })
    }
}

/// Ephemeris that fails every call.
pub struct FailingEphemeris;

impl Ephemeris for FailingEphemeris {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn moon_illumination(&self, instant: &NaiveDateTime) -> EphemerisResult<f64> {
        Err(EphemerisError::TimeConversion {
            instant: *instant,
            reason: "UTC history unsupported".to_string(),
        })
    }

    fn planet_position(
        &self,
        _planet: Planet,
        _instant: &NaiveDateTime,
        observer: &GeographicLocation,
    ) -> EphemerisResult<PlanetPosition> {
        Err(EphemerisError::InvalidObserver {
            latitude: observer.latitude,
            longitude: observer.longitude,
        })
    }
}
