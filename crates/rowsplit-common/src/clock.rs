//! Conversions between elapsed seconds and `M:SS.d` clock text.

use chrono::{NaiveDate, NaiveTime, Timelike};

const TENTH_TOLERANCE: f64 = 1e-6;

/// An elapsed time broken into display components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    /// Whole minutes, unbounded.
    pub minutes: u64,
    /// Whole seconds remaining after the minutes, `0..60`.
    pub seconds: u8,
    /// Tenths of a second, truncated.
    pub deciseconds: u8,
}

impl ClockParts {
    /// Breaks a non-negative number of seconds into clock components.
    ///
    /// The decisecond digit is truncated, never rounded, so `59.96` stays
    /// `0:59.9` instead of rolling over to `1:00.0`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_seconds(seconds: f64) -> Self {
        // Values parsed from `1:52.3` land a few ulps below the tenth.
        let tenths = (seconds.max(0.0) * 10.0 + TENTH_TOLERANCE).floor() as u64;

        Self {
            minutes: tenths / 600,
            seconds: ((tenths % 600) / 10) as u8,
            deciseconds: (tenths % 10) as u8,
        }
    }
}

impl std::fmt::Display for ClockParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}.{}", self.minutes, self.seconds, self.deciseconds)
    }
}

/// Renders elapsed seconds as `M:SS.d`.
///
/// Negative values render with a leading `-`. Non-finite values render as
/// `-:--.-`.
///
/// ```
/// use rowsplit_common::seconds_to_clock;
///
/// assert_eq!(seconds_to_clock(125.34), "2:05.3");
/// assert_eq!(seconds_to_clock(59.96), "0:59.9");
/// ```
pub fn seconds_to_clock(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "-:--.-".to_string();
    }
    if seconds < 0.0 {
        return format!("-{}", ClockParts::from_seconds(-seconds));
    }
    ClockParts::from_seconds(seconds).to_string()
}

/// Parses clock text into elapsed seconds.
///
/// Accepts `M:SS.s`, `H:MM:SS.s` and bare seconds (`95.3`). Returns `None`
/// for empty, negative or otherwise unparseable text.
pub fn parse_clock(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut total = 0.0;
    for part in parts {
        let value: f64 = part.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        total = total * 60.0 + value;
    }
    Some(total)
}

/// Elapsed seconds represented by a time-of-day value, fractions included.
pub fn time_of_day_seconds(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond()) / 1e9
}

/// Parses a sheet date written as `YYYY/MM/DD` (or ISO `YYYY-MM-DD`).
pub fn parse_sheet_date(text: &str) -> Option<NaiveDate> {
    let normalized = text.trim().replace('/', "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

/// Rounds to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
