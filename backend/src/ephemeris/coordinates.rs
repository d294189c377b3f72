//! Coordinate value types handed back by an [`super::Ephemeris`].

use qtty::{Degrees, HourAngle};

/// Equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub ra: Degrees,
    pub dec: Degrees,
}

impl Equatorial {
    pub fn new(ra: Degrees, dec: Degrees) -> Self {
        Self {
            ra: ra.wrap_pos(),
            dec,
        }
    }

    /// Right ascension in hours of time (`[0, 24)`).
    pub fn ra_hours(&self) -> f64 {
        self.ra.to::<HourAngle>().value()
    }
}

/// Horizontal (alt-az) coordinates. Azimuth is measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    pub azimuth: Degrees,
    pub elevation: Degrees,
}

/// Wrap an azimuth into `[0, 360)`, guarding the `rem_euclid` edge that can yield exactly 360.
pub fn normalize_azimuth(angle: Degrees) -> Degrees {
    let wrapped = angle.wrap_pos();
    if wrapped.value() >= 360.0 {
        Degrees::new(0.0)
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equatorial_wraps_ra() {
        let eq = Equatorial::new(Degrees::new(-15.0), Degrees::new(10.0));
        assert!((eq.ra.value() - 345.0).abs() < 1e-12);
        assert!((eq.ra_hours() - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_azimuth() {
        assert_eq!(normalize_azimuth(Degrees::new(-90.0)).value(), 270.0);
        assert_eq!(normalize_azimuth(Degrees::new(720.0)).value(), 0.0);
        assert_eq!(normalize_azimuth(Degrees::new(-1e-15)).value(), 0.0);
    }
}
