//! Lunar phase calculator.
//!
//! Asks the ephemeris for the Moon's illumination at the requested instant and
//! buckets it into one of five named phases.

use std::fmt;

use chrono::NaiveDateTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::error::CalculationResult;
use super::round_to_places;
use crate::ephemeris::Ephemeris;
use crate::models::ObservationRequest;

/// Decimal places kept on the illumination percentage.
pub const ILLUMINATION_DECIMALS: i32 = 3;

/// Named lunar phase. Waxing and waning halves share a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing/Waning Crescent")]
    Crescent,
    #[serde(rename = "First/Last Quarters")]
    Quarter,
    #[serde(rename = "Waxing/Waning Gibbous")]
    Gibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
}

impl PhaseName {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::Crescent => "Waxing/Waning Crescent",
            PhaseName::Quarter => "First/Last Quarters",
            PhaseName::Gibbous => "Waxing/Waning Gibbous",
            PhaseName::FullMoon => "Full Moon",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an illumination percentage.
///
/// The branches are not mutually exclusive and must be checked in this order.
/// The quarter test truncates the raw value while every other test uses the
/// value rounded half-to-even, so 50.9 is a quarter but 49.6 (rounds to 50,
/// truncates to 49) matches nothing and yields `None`.
pub fn classify_phase(illumination: f64) -> Option<PhaseName> {
    let rounded = illumination.round_ties_even();

    if rounded == 0.0 {
        Some(PhaseName::NewMoon)
    } else if (1.0..=49.0).contains(&rounded) {
        Some(PhaseName::Crescent)
    } else if illumination.trunc() == 50.0 {
        Some(PhaseName::Quarter)
    } else if (51.0..=99.0).contains(&rounded) {
        Some(PhaseName::Gibbous)
    } else if rounded == 100.0 {
        Some(PhaseName::FullMoon)
    } else {
        None
    }
}

/// Lunar calculator output for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarResult {
    pub instant: NaiveDateTime,
    /// Percent of the disk lit, rounded to [`ILLUMINATION_DECIMALS`] places
    pub illumination: f64,
    /// `None` when the illumination fell through every classification branch
    pub phase: Option<PhaseName>,
    pub formatted_date: String,
}

impl LunarResult {
    pub fn phase_label(&self) -> Option<&'static str> {
        self.phase.as_ref().map(PhaseName::label)
    }
}

/// Compute illumination and phase for `request.instant`.
pub fn compute_lunar_result(
    ephemeris: &dyn Ephemeris,
    request: &ObservationRequest,
) -> CalculationResult<LunarResult> {
    let raw = ephemeris.moon_illumination(&request.instant)?;
    let illumination = round_to_places(raw, ILLUMINATION_DECIMALS);
    let phase = classify_phase(illumination);

    match phase {
        Some(phase) => debug!(
            "lunar phase at {}: {}% -> {}",
            request.instant, illumination, phase
        ),
        None => warn!(
            "illumination {}% at {} matched no phase rule (ephemeris: {})",
            illumination,
            request.instant,
            ephemeris.name()
        ),
    }

    Ok(LunarResult {
        instant: request.instant,
        illumination,
        phase,
        formatted_date: request.formatted_date(),
    })
}
