//! Checker configuration.
//!
//! Every threshold the rules use lives here so datasets from other
//! latitudes can be recalibrated without code changes. All sections default
//! to the values the checker ships with; a config file only needs the keys
//! it overrides.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::time::{self, format_clock};
use crate::types::Prayer;

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// An inclusive clock window.
///
/// A window whose start is later than its end wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "time::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time <= self.end
        } else {
            self.start <= time && time <= self.end
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", format_clock(self.start), format_clock(self.end))
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
    TimeWindow {
        start: hm(start.0, start.1),
        end: hm(end.0, end.1),
    }
}

/// Maximum expected change between consecutive days, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftThresholds {
    pub subh: u32,
    pub sunrise: u32,
    pub dhuhr: u32,
    pub sunset: u32,
    pub maghrib: u32,
    pub midnight: u32,
}

impl DriftThresholds {
    pub fn get(&self, prayer: Prayer) -> u32 {
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

impl Default for DriftThresholds {
    fn default() -> Self {
        Self {
            subh: 10,
            sunrise: 10,
            dhuhr: 5,
            sunset: 10,
            maghrib: 10,
            midnight: 15,
        }
    }
}

/// Plausible clock windows per prayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibleWindows {
    pub subh: TimeWindow,
    pub sunrise: TimeWindow,
    pub dhuhr: TimeWindow,
    pub sunset: TimeWindow,
    pub maghrib: TimeWindow,
    pub midnight: TimeWindow,
}

impl PlausibleWindows {
    pub fn get(&self, prayer: Prayer) -> TimeWindow {
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

impl Default for PlausibleWindows {
    fn default() -> Self {
        Self {
            subh: window((3, 0), (7, 0)),
            sunrise: window((4, 0), (8, 0)),
            dhuhr: window((11, 0), (15, 0)),
            sunset: window((16, 0), (21, 0)),
            maghrib: window((16, 0), (21, 30)),
            midnight: window((21, 0), (6, 0)),
        }
    }
}

/// Tuning for the seasonal trend heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Fewer entries than this and the trend rule stays silent.
    pub min_days: usize,
    /// Both deltas of a reversal must exceed this many minutes.
    pub min_magnitude: i64,
    /// One reversal is tolerated per this many deltas.
    pub tolerance_divisor: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_days: 7,
            min_magnitude: 2,
            tolerance_divisor: 7,
        }
    }
}

/// Configuration for the whole checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub drift: DriftThresholds,
    pub windows: PlausibleWindows,
    pub trend: TrendConfig,

    /// A midnight value that has not wrapped past maghrib is flagged when it
    /// is later than this.
    #[serde(with = "time::hhmm")]
    pub midnight_unusual_after: NaiveTime,

    /// Extra month names, appended after the built-in English and Danish
    /// tables.
    pub month_aliases: BTreeMap<String, u32>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            drift: DriftThresholds::default(),
            windows: PlausibleWindows::default(),
            trend: TrendConfig::default(),
            midnight_unusual_after: hm(6, 0),
            month_aliases: BTreeMap::new(),
        }
    }
}

impl CheckerConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CheckerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CheckerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` is read as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.tolerance_divisor == 0 {
            return Err(ConfigError::InvalidValue(
                "trend.tolerance_divisor must be at least 1".to_string(),
            ));
        }

        if self.trend.min_days < 2 {
            return Err(ConfigError::InvalidValue(
                "trend.min_days must be at least 2".to_string(),
            ));
        }

        if self.trend.min_magnitude < 0 {
            return Err(ConfigError::InvalidValue(
                "trend.min_magnitude must not be negative".to_string(),
            ));
        }

        for (name, month) in &self.month_aliases {
            if !(1..=12).contains(month) {
                return Err(ConfigError::InvalidValue(format!(
                    "month alias '{}' maps to {}, expected 1..=12",
                    name, month
                )));
            }
        }

        Ok(())
    }
}
