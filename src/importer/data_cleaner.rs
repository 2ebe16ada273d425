// ==========================================
// Teaching Claim - Data cleaner
// ==========================================
// Blank-to-null normalisation and time-of-day canonicalisation.
// Malformed values become None; nothing here returns an error.
// ==========================================

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Canonical time-of-day representation written to every output.
pub const TIME_FORMAT: &str = "%H:%M:%S";

const TIME_INPUT_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M",
    "%H:%M:%S%.f",
    "%I:%M %p",
    "%I:%M:%S %p",
    "%I:%M%p",
    "%I:%M:%S%p",
];

const DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub struct DataCleaner;

impl DataCleaner {
    /// Trims; blank becomes None.
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Canonicalises a time-of-day cell to `HH:MM:SS`.
    ///
    /// Accepts 24-hour and 12-hour clock text, date-time text (the date part
    /// is dropped) and Excel day fractions such as `0.375`. Whole numbers and
    /// anything else are None.
    pub fn normalize_time(&self, value: Option<&str>) -> Option<String> {
        let raw = value?.trim();
        if raw.is_empty() {
            return None;
        }
        parse_time_of_day(raw).map(|t| t.format(TIME_FORMAT).to_string())
    }
}

fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    for fmt in TIME_INPUT_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(raw, fmt) {
            return Some(time.with_nanosecond(0).unwrap_or(time));
        }
    }

    for fmt in DATETIME_INPUT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            let time = dt.time();
            return Some(time.with_nanosecond(0).unwrap_or(time));
        }
    }

    // Excel stores times as a fraction of a day; date-times carry an integer part
    // Whole numbers ("1400", a date-only serial) carry no time of day
    let serial: f64 = raw.parse().ok()?;
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    if serial >= 1.0 && serial.fract() == 0.0 {
        return None;
    }
    let seconds = (serial.fract() * 86_400.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}

/// Alphabetic characters only, in order ("CS101_A" -> "CSA").
pub fn alphabetic_residue(value: &str) -> String {
    value.chars().filter(|c| c.is_alphabetic()).collect()
}
