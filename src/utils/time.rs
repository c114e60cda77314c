use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

// Tried after RFC 3339, once a trailing `Z` has become `+00:00`.
const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into wall-clock time in `tz`.
///
/// Timestamps carrying an offset (`Z`, `+02:00`, `+0200`) are converted into
/// `tz`. Date-times without one are already local and are taken as-is. A bare
/// date means UTC midnight. This is how a browser's `Date` reads them.
pub fn parse_local<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let ts = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(tz).naive_local());
    }

    let zoned = match ts.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => ts.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Some(dt.with_timezone(tz).naive_local());
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(dt);
        }
    }

    let midnight = NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz).naive_local())
}

/// Calendar day of `timestamp` as seen from `tz`.
pub fn local_day<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<NaiveDate> {
    parse_local(timestamp, tz).map(|dt| dt.date())
}
