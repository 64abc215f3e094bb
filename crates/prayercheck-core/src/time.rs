//! Wall-clock helpers shared by the rules.
//!
//! Prayer times carry hour:minute precision and no date. Every comparison
//! the rules make reduces to minutes since midnight, plus one heuristic for
//! values that roll over into the next calendar day.

use chrono::{NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

lazy_static! {
    /// `H:MM`, `HH:MM`, `HH.MM`, optionally followed by `:SS`.
    static ref CLOCK_PATTERN: Regex = Regex::new(
        r"^\s*(\d{1,2})[:.](\d{2})(?:[:.](\d{2}))?\s*$"
    ).unwrap();
}

/// Errors from parsing a clock string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("'{0}' is not a clock time (expected HH:MM)")]
    Malformed(String),

    #[error("'{0}' is out of range for a 24-hour clock")]
    OutOfRange(String),
}

/// Parse a clock string as produced by the extraction step.
///
/// Seconds must be in range and are then dropped.
pub fn parse_clock(input: &str) -> Result<NaiveTime, TimeParseError> {
    let caps = CLOCK_PATTERN
        .captures(input)
        .ok_or_else(|| TimeParseError::Malformed(input.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| TimeParseError::Malformed(input.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| TimeParseError::Malformed(input.to_string()))?;
    let second: u32 = match caps.get(3) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| TimeParseError::Malformed(input.to_string()))?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
        .and_then(|_| NaiveTime::from_hms_opt(hour, minute, 0))
        .ok_or_else(|| TimeParseError::OutOfRange(input.to_string()))
}

/// Render a time as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes elapsed since 00:00.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Signed minutes from `previous` (day N) to `next` (day N+1).
///
/// When `next` falls before noon and `previous` after noon, `next` is read
/// as belonging to the following calendar day, so 23:50 -> 00:05 is +15.
/// This is a heuristic: values far outside the 18:00-06:00 band can be
/// misread.
pub fn day_over_day_minutes(previous: NaiveTime, next: NaiveTime) -> i64 {
    let mut next_minutes = minutes_since_midnight(next);
    if next.hour() < 12 && previous.hour() > 12 {
        next_minutes += MINUTES_PER_DAY;
    }
    next_minutes - minutes_since_midnight(previous)
}

/// Serde support for `HH:MM` strings.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}
