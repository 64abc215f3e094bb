//! Schedule parsing from JSON/YAML.

use chrono::{Datelike, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_schedule_schema;
use crate::time::{self, parse_clock, TimeParseError};
use crate::types::Prayer;

/// Errors that can occur when ingesting a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to read schedule file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Schedule does not match schema: {}", .0.join("; "))]
    SchemaViolation(Vec<String>),

    #[error("Invalid time: {0}")]
    InvalidTime(#[from] TimeParseError),
}

/// The six times of one day. Only presence is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    #[serde(with = "time::hhmm")]
    pub subh: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub sunrise: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub dhuhr: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub sunset: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub maghrib: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub midnight: NaiveTime,
}

impl PrayerTimes {
    /// Build from clock strings in timetable order
    /// (subh, sunrise, dhuhr, sunset, maghrib, midnight).
    pub fn from_clock_strs(times: [&str; 6]) -> Result<Self, ScheduleError> {
        Ok(Self {
            subh: parse_clock(times[0])?,
            sunrise: parse_clock(times[1])?,
            dhuhr: parse_clock(times[2])?,
            sunset: parse_clock(times[3])?,
            maghrib: parse_clock(times[4])?,
            midnight: parse_clock(times[5])?,
        })
    }

    pub fn get(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Subh => self.subh,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Midnight => self.midnight,
        }
    }
}

/// One row of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrayerSchedule {
    /// Weekday label as printed, e.g. "fredag".
    pub weekday: String,

    /// Day of the month. Not range-checked here.
    #[serde(rename = "date")]
    pub day: i32,

    pub prayers: PrayerTimes,
}

impl DailyPrayerSchedule {
    pub fn new(weekday: impl Into<String>, day: i32, prayers: PrayerTimes) -> Self {
        Self {
            weekday: weekday.into(),
            day,
            prayers,
        }
    }
}

fn current_month_name() -> String {
    Local::now().format("%B").to_string()
}

fn current_year() -> i32 {
    Local::now().year()
}

/// A month of prayer times for one city.
///
/// Days are kept in the order they were received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPrayerSchedule {
    /// Month name in any language or casing.
    #[serde(default = "current_month_name")]
    pub month: String,

    #[serde(default = "current_year")]
    pub year: i32,

    pub city: String,

    #[serde(rename = "schedule")]
    pub days: Vec<DailyPrayerSchedule>,
}

impl MonthlyPrayerSchedule {
    pub fn new(
        month: impl Into<String>,
        year: i32,
        city: impl Into<String>,
        days: Vec<DailyPrayerSchedule>,
    ) -> Self {
        Self {
            month: month.into(),
            year,
            city: city.into(),
            days,
        }
    }

    /// Parse a schedule from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a schedule from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScheduleError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Load a schedule file; `.yaml`/`.yml` are read as YAML, anything else
    /// as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::from_yaml(&contents)
            }
            _ => Self::from_json(&contents),
        }
    }

    /// Validate a raw document against the schema, then deserialize it.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ScheduleError> {
        validate_schedule_schema(&value).map_err(ScheduleError::SchemaViolation)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize back to the wire shape.
    pub fn to_json(&self) -> Result<String, ScheduleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
