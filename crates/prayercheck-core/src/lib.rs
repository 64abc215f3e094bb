//! # prayercheck-core
//!
//! Deterministic sanity checking for monthly prayer-time schedules
//! extracted from timetable images by OCR/LLM.
//!
//! This crate answers one question before a schedule reaches a calendar:
//! can this extraction be trusted?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same schedule always produces the same result
//! 2. **Never fails on data**: Every anomaly is a finding, not an error
//! 3. **Two tiers**: Issues reject the schedule, warnings never do
//! 4. **Shareable**: A checker holds no per-call state
//!
//! ## Example
//!
//! ```rust,ignore
//! use prayercheck_core::{MonthlyPrayerSchedule, SanityChecker, Verdict};
//!
//! let schedule = MonthlyPrayerSchedule::from_file("august.json")?;
//! let result = SanityChecker::new().check(&schedule);
//!
//! match result.verdict() {
//!     Verdict::Accept => println!("OK"),
//!     Verdict::AcceptWithCaveats => println!("OK with {} warnings", result.warnings.len()),
//!     Verdict::Reject => println!("Retry extraction:\n{}", result),
//! }
//! ```

pub mod checker;
pub mod config;
pub mod month;
pub mod report;
pub mod rules;
pub mod schedule;
pub mod time;
pub mod types;

// Re-export main types at crate root
pub use checker::SanityChecker;
pub use config::{
    CheckerConfig, ConfigError, DriftThresholds, PlausibleWindows, TimeWindow, TrendConfig,
};
pub use month::{days_in_month, MonthLookup, MonthTable};
pub use report::render_report;
pub use rules::{
    CompletenessRule, InterDayJumpRule, IntraDayOrderRule, RangeRule, Rule, SeasonalTrendRule,
    SequenceRule,
};
pub use schedule::{DailyPrayerSchedule, MonthlyPrayerSchedule, PrayerTimes, ScheduleError};
pub use time::{parse_clock, TimeParseError};
pub use types::{CheckResult, Prayer, RuleFindings, RuleKind, Verdict};

/// Check a schedule with the default configuration.
///
/// Equivalent to `SanityChecker::new().check(schedule)`.
pub fn check(schedule: &MonthlyPrayerSchedule) -> CheckResult {
    SanityChecker::new().check(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUGUST_START: &str = r#"{
        "month": "August",
        "year": 2025,
        "city": "Copenhagen",
        "schedule": [
            {"weekday": "fredag", "date": 1,
             "prayers": {"subh": "03:51", "sunrise": "05:27", "dhuhr": "13:19",
                         "sunset": "20:55", "maghrib": "21:05", "midnight": "01:18"}},
            {"weekday": "lørdag", "date": 2,
             "prayers": {"subh": "03:55", "sunrise": "05:29", "dhuhr": "13:19",
                         "sunset": "20:53", "maghrib": "21:03", "midnight": "01:17"}}
        ]
    }"#;

    #[test]
    fn test_partial_extraction_rejected() {
        let schedule = MonthlyPrayerSchedule::from_json(AUGUST_START).unwrap();
        let result = check(&schedule);

        assert!(!result.is_valid);
        assert_eq!(result.verdict(), Verdict::Reject);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].starts_with("Missing dates: [3, 4, 5"));
        // Two days is too short for trend analysis and the values are sane.
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_report_mentions_schedule() {
        let schedule = MonthlyPrayerSchedule::from_json(AUGUST_START).unwrap();
        let report = check(&schedule).to_string();
        assert!(report.contains("Schedule: Copenhagen - August 2025"));
        assert!(report.contains("Total days parsed: 2"));
        assert!(report.contains("FAILED"));
    }
}
