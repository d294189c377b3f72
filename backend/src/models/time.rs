use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime};

use super::InputError;

/// Calendar years the calculators accept.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1000..=3000;

/// Form field format sent by `<input type="datetime-local">`.
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Same as [`FORM_DATETIME_FORMAT`] when the browser includes seconds.
pub const FORM_DATETIME_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-readable date used in rendered results, e.g. `Thursday, 25 January, 2024`.
pub const LONG_DATE_FORMAT: &str = "%A, %d %B, %Y";

/// Parse the `date` form field (`YYYY-MM-DDTHH:MM`, seconds optional).
///
/// Years outside [`SUPPORTED_YEARS`] are rejected as bad input.
pub fn parse_instant(raw: &str) -> Result<NaiveDateTime, InputError> {
    let trimmed = raw.trim();
    let instant = NaiveDateTime::parse_from_str(trimmed, FORM_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, FORM_DATETIME_SECONDS_FORMAT))
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))?;
    let year = year_of(&instant);
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(InputError::YearOutOfRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        });
    }
    Ok(instant)
}

/// Render an instant as `Weekday, DD Month, YYYY`.
pub fn format_long_date(instant: &NaiveDateTime) -> String {
    instant.format(LONG_DATE_FORMAT).to_string()
}

/// Calendar year of an instant, used for validity-window checks.
pub fn year_of(instant: &NaiveDateTime) -> i32 {
    use chrono::Datelike;
    instant.date().year()
}

/// Build a naive instant from calendar fields; `None` when the fields are out of range.
pub fn instant_from_parts(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}
