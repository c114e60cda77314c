use chrono::{NaiveDate, TimeZone};

use crate::utils::time::parse_local;

pub const DAY_FORMAT: &str = "%d-%m-%Y";
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Render a usage timestamp in the viewer's zone as `dd-mm-yyyy HH:MM`.
/// Unparseable input is returned unchanged.
pub fn format_timestamp<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    match parse_local(timestamp, tz) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn format_credits(credits: f64) -> String {
    format!("{:.2}", credits)
}

/// Round to cents, half away from zero on the stored binary value.
pub fn round_credits(credits: f64) -> f64 {
    (credits * 100.0).round() / 100.0
}
