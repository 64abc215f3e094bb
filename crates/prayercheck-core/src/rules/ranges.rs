//! Range Plausibility Rule
//!
//! **Question**: Does each time fall in a plausible window?
//!
//! The windows describe typical latitudes and seasons, not physical law,
//! so a time outside its window is a warning only.

use crate::config::PlausibleWindows;
use crate::schedule::MonthlyPrayerSchedule;
use crate::time::format_clock;
use crate::types::{Prayer, RuleFindings, RuleKind};

use super::Rule;

/// Checks every time against its prayer's window.
pub struct RangeRule<'a> {
    windows: &'a PlausibleWindows,
}

impl<'a> RangeRule<'a> {
    pub fn new(windows: &'a PlausibleWindows) -> Self {
        Self { windows }
    }
}

impl Rule for RangeRule<'_> {
    fn kind(&self) -> RuleKind {
        RuleKind::RangePlausibility
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());

        for day in &schedule.days {
            for prayer in Prayer::ALL {
                let time = day.prayers.get(prayer);
                let window = self.windows.get(prayer);

                if !window.contains(time) {
                    findings.warn(format!(
                        "Date {}: {} time ({}) outside reasonable range ({})",
                        day.day,
                        prayer,
                        format_clock(time),
                        window
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
        let windows = PlausibleWindows::default();
        RangeRule::new(&windows).evaluate(schedule)
    }

    #[test]
    fn test_reference_day_in_range() {
        assert!(evaluate(&month("August", 2025, vec![day(1)])).is_clean());
    }

    #[test]
    fn test_midnight_in_afternoon() {
        let mut prayers = times();
        prayers.midnight = t("14:00");
        let findings = evaluate(&month("August", 2025, vec![day_with(5, prayers)]));

        assert!(findings.issues.is_empty());
        assert_eq!(
            findings.warnings,
            vec!["Date 5: midnight time (14:00) outside reasonable range (21:00 - 06:00)"]
        );
    }

    #[test]
    fn test_midnight_window_edges() {
        for edge in ["21:00", "23:59", "00:00", "06:00"] {
            let mut prayers = times();
            prayers.midnight = t(edge);
            let findings = evaluate(&month("August", 2025, vec![day_with(1, prayers)]));
            assert!(findings.is_clean(), "midnight {edge} should be plausible");
        }
    }

    #[test]
    fn test_plain_window_edges_inclusive() {
        let mut prayers = times();
        prayers.maghrib = t("21:30");
        prayers.sunset = t("21:00");
        prayers.subh = t("03:00");
        prayers.midnight = t("23:00");
        assert!(evaluate(&month("June", 2025, vec![day_with(1, prayers)])).is_clean());

        let mut prayers = times();
        prayers.maghrib = t("21:31");
        let findings = evaluate(&month("June", 2025, vec![day_with(1, prayers)]));
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.warnings[0].contains("maghrib"));
    }

    #[test]
    fn test_one_warning_per_day_and_prayer() {
        let mut prayers = times();
        prayers.dhuhr = t("10:00");
        let schedule = month("August", 2025, vec![day_with(1, prayers), day_with(2, prayers)]);
        assert_eq!(evaluate(&schedule).warnings.len(), 2);
    }
}
