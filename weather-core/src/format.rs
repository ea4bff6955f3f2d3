//! Turns snapshot values into the strings the dashboard shows.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const COMPASS_ROSE: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// `"<label> (<degrees>°)"`, e.g. `"NNE (23°)"`.
pub fn wind_direction_label(degrees: f64) -> String {
    let index = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    format!("{} ({}°)", COMPASS_ROSE[index], number(degrees.round()))
}

/// City followed by whichever of region and country are present, comma-joined.
pub fn location_label(city: &str, region: Option<&str>, country: Option<&str>) -> String {
    std::iter::once(city)
        .chain(region)
        .chain(country)
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `HH:MM` for a server timestamp, or the raw value if it can't be read.
pub fn time_of_day(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => timestamp.to_string(),
    }
}

/// `"<Wkd>, DD/MM"` for a calendar date such as `2024-01-15`.
pub fn day_label(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(date).map(|dt| dt.date()));

    match parsed {
        Some(day) => day.format("%a, %d/%m").to_string(),
        None => date.to_string(),
    }
}

pub fn last_updated(timestamp: &str) -> String {
    format!("Updated at {}", time_of_day(timestamp))
}

/// Whole numbers print without a fractional part, matching what the backend rounds to.
pub fn number(value: f64) -> String {
    // -0 prints as "0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

pub fn percentage(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{}%", number(value)),
        None => "-%".to_string(),
    }
}

/// Location-local timestamps are taken as-is; offset-carrying ones are shown in local time.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}
