//! Inter-day Jump Rule
//!
//! **Question**: Does each prayer drift smoothly from one day to the next?
//!
//! Only day N and day N+1 are compared; gaps are skipped silently because
//! completeness already reports them. Jumps are warnings, never issues:
//! a daylight-saving change legitimately moves every prayer by an hour.

use crate::config::DriftThresholds;
use crate::schedule::MonthlyPrayerSchedule;
use crate::time::{day_over_day_minutes, format_clock};
use crate::types::{Prayer, RuleFindings, RuleKind};

use super::{sorted_days, Rule};

/// Flags day-over-day changes larger than the per-prayer drift threshold.
pub struct InterDayJumpRule<'a> {
    thresholds: &'a DriftThresholds,
}

impl<'a> InterDayJumpRule<'a> {
    pub fn new(thresholds: &'a DriftThresholds) -> Self {
        Self { thresholds }
    }
}

impl Rule for InterDayJumpRule<'_> {
    fn kind(&self) -> RuleKind {
        RuleKind::InterDayJump
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());
        let days = sorted_days(schedule);

        for pair in days.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if current.day.checked_add(1) != Some(next.day) {
                continue;
            }

            for prayer in Prayer::ALL {
                let before = current.prayers.get(prayer);
                let after = next.prayers.get(prayer);
                let diff = day_over_day_minutes(before, after);

                if diff.unsigned_abs() > u64::from(self.thresholds.get(prayer)) {
                    findings.warn(format!(
                        "Large time jump in {} between dates {} and {}: {} -> {} ({:+.1} minutes)",
                        prayer,
                        current.day,
                        next.day,
                        format_clock(before),
                        format_clock(after),
                        diff as f64
                    ));
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    fn evaluate(schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let thresholds = DriftThresholds::default();
        InterDayJumpRule::new(&thresholds).evaluate(schedule)
    }

    #[test]
    fn test_steady_month_is_clean() {
        assert!(evaluate(&flat_month("August", 2025, 31)).is_clean());
    }

    #[test]
    fn test_dhuhr_jump_of_twenty() {
        let mut second = times();
        second.dhuhr = t("12:20");
        let schedule = month("August", 2025, vec![day(1), day_with(2, second)]);

        let findings = evaluate(&schedule);
        assert!(findings.issues.is_empty());
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.warnings[0].contains("dhuhr"));
        assert!(findings.warnings[0].contains("(+20.0 minutes)"));
        assert_eq!(
            findings.warnings[0],
            "Large time jump in dhuhr between dates 1 and 2: 12:00 -> 12:20 (+20.0 minutes)"
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut second = times();
        second.dhuhr = t("12:05");
        second.midnight = t("00:45");
        let schedule = month("August", 2025, vec![day(1), day_with(2, second)]);
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_negative_jump_is_signed() {
        let mut second = times();
        second.sunset = t("17:30");
        let schedule = month("August", 2025, vec![day(1), day_with(2, second)]);
        let findings = evaluate(&schedule);
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.warnings[0].ends_with("(-30.0 minutes)"));
    }

    #[test]
    fn test_midnight_rolling_over_is_small() {
        let mut first = times();
        first.midnight = t("23:55");
        let mut second = times();
        second.midnight = t("00:05");
        let schedule = month("December", 2025, vec![day_with(1, first), day_with(2, second)]);
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_gaps_are_skipped() {
        let mut later = times();
        later.dhuhr = t("13:00");
        let schedule = month("August", 2025, vec![day(1), day_with(3, later)]);
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_compares_in_day_order_not_received_order() {
        let mut second = times();
        second.subh = t("05:30");
        let schedule = month("August", 2025, vec![day_with(2, second), day(1)]);

        let findings = evaluate(&schedule);
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.warnings[0].contains("between dates 1 and 2: 05:00 -> 05:30 (+30.0"));
        assert_eq!(schedule.days[0].day, 2);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = DriftThresholds {
            dhuhr: 30,
            ..DriftThresholds::default()
        };
        let mut second = times();
        second.dhuhr = t("12:20");
        let schedule = month("August", 2025, vec![day(1), day_with(2, second)]);
        assert!(InterDayJumpRule::new(&thresholds).evaluate(&schedule).is_clean());
    }
}
