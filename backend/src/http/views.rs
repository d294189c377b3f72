//! HTML rendering for the calculator pages.
//!
//! Pages are small enough to build with `format!`; every piece of request
//! derived text goes through [`escape`].

use std::fmt::Write;

use axum::http::StatusCode;

use super::error::ApiError;
use crate::services::{LunarResult, PlanetaryResult};

/// What a calculator page shows below its form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<T> {
    /// Fresh page, no submission yet
    Blank,
    /// Submitted with at least one blank field
    Empty,
    /// Submitted with a field that could not be parsed
    Invalid(String),
    /// Successful calculation
    Result(T),
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;background:#0b1026;color:#e8e8f0;margin:0 auto;max-width:56rem;padding:2rem}\
a{color:#9ecbff}table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #3a4070;padding:.35rem .6rem;text-align:right}\
th:first-child,td:first-child{text-align:left}\
.notice{background:#4a2330;padding:.6rem 1rem;border-radius:.3rem}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
<nav><a href=\"/\">Home</a> | <a href=\"/lunar\">Lunar Phase</a> | <a href=\"/planet\">Planet Positions</a></nav>\n\
{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn notice<T>(state: &FormState<T>) -> String {
    match state {
        FormState::Empty => {
            "<p class=\"notice\" data-state=\"empty\">Please fill in every field.</p>".to_string()
        }
        FormState::Invalid(message) => format!(
            "<p class=\"notice\" data-state=\"invalid\">{}</p>",
            escape(message)
        ),
        FormState::Blank | FormState::Result(_) => String::new(),
    }
}

/// Landing page linking to both calculators.
pub fn landing_page() -> String {
    layout(
        "Sky Calculator",
        "<h1>Sky Calculator</h1>\n\
<ul>\n\
<li><a href=\"/lunar\">Lunar phase</a>: how much of the Moon is lit on a given date</li>\n\
<li><a href=\"/planet\">Planet positions</a>: where the planets are from a given place</li>\n\
</ul>",
    )
}

/// Lunar calculator page.
pub fn lunar_page(state: &FormState<LunarResult>) -> String {
    let mut body = String::from(
        "<h1>Lunar Phase</h1>\n\
<form method=\"post\" action=\"/calculate_lunar_phase\">\n\
<label>Date and time <input type=\"datetime-local\" name=\"date\"></label>\n\
<button type=\"submit\">Calculate</button>\n\
</form>\n",
    );
    body.push_str(&notice(state));

    if let FormState::Result(result) = state {
        let phase = result.phase_label().unwrap_or("Unclassified");
        let _ = write!(
            body,
            "<section class=\"result\" data-state=\"result\">\n\
<h2>{date}</h2>\n\
<p>Illumination: <strong class=\"illumination\">{illumination}%</strong></p>\n\
<p>Phase: <strong class=\"phase\">{phase}</strong></p>\n\
</section>",
            date = escape(&result.formatted_date),
            illumination = result.illumination,
            phase = escape(phase),
        );
    }

    layout("Lunar Phase", &body)
}

/// Planetary calculator page.
pub fn planet_page(state: &FormState<PlanetaryResult>) -> String {
    let mut body = String::from(
        "<h1>Planet Positions</h1>\n\
<form method=\"post\" action=\"/calculate_planet_positions\">\n\
<label>Date and time <input type=\"datetime-local\" name=\"date\"></label>\n\
<label>Latitude <input type=\"text\" name=\"latitude\" inputmode=\"decimal\"></label>\n\
<label>Longitude <input type=\"text\" name=\"longitude\" inputmode=\"decimal\"></label>\n\
<button type=\"submit\">Calculate</button>\n\
</form>\n",
    );
    body.push_str(&notice(state));

    if let FormState::Result(result) = state {
        let _ = write!(
            body,
            "<section class=\"result\" data-state=\"result\">\n\
<h2>{date}</h2>\n\
<p>Observer: {lat}, {lon}</p>\n\
<table>\n<thead><tr><th>Planet</th><th>Azimuth (&deg;)</th><th>Elevation (&deg;)</th>\
<th>RA hours</th><th>RA minutes</th><th>RA seconds</th><th>Declination (&deg;)</th></tr></thead>\n<tbody>\n",
            date = escape(&result.formatted_date),
            lat = result.observer.latitude,
            lon = result.observer.longitude,
        );
        for (planet, record) in result.iter() {
            let ra = &record.right_ascension;
            let _ = writeln!(
                body,
                "<tr data-planet=\"{name}\"><td>{name}</td><td>{az:.4}</td><td>{el:.4}</td>\
<td>{h}</td><td>{m}</td><td>{s}</td><td>{dec:.4}</td></tr>",
                name = planet.name(),
                az = record.azimuth_deg,
                el = record.elevation_deg,
                h = ra.hours_label(),
                m = ra.minutes_label(),
                s = ra.seconds_label(),
                dec = record.declination_deg,
            );
        }
        body.push_str("</tbody>\n</table>\n</section>");
    }

    layout("Planet Positions", &body)
}

/// Generic error page for failures that are not the user's input.
pub fn error_page(status: StatusCode, error: &ApiError) -> String {
    let mut body = format!(
        "<h1>{} {}</h1>\n<p class=\"notice\" data-state=\"error\">{}</p>\n",
        status.as_u16(),
        escape(status.canonical_reason().unwrap_or("Error")),
        escape(&error.message),
    );
    if let Some(details) = &error.details {
        let _ = writeln!(body, "<p><code>{}</code></p>", escape(details));
    }
    body.push_str("<p><a href=\"/\">Back to start</a></p>");
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_blank_lunar_page_has_form_only() {
        let page = lunar_page(&FormState::Blank);
        assert!(page.contains("name=\"date\""));
        assert!(!page.contains("data-state"));
    }

    #[test]
    fn test_empty_indicator() {
        let page = planet_page(&FormState::Empty);
        assert!(page.contains("data-state=\"empty\""));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn test_invalid_message_is_escaped() {
        let page = lunar_page(&FormState::Invalid("bad <date>".to_string()));
        assert!(page.contains("bad &lt;date&gt;"));
    }
}
