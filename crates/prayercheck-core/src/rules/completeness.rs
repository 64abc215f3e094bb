//! Completeness Rule
//!
//! **Question**: Is every day of the month present, and nothing outside it?
//!
//! | Finding | Tier |
//! |---------|------|
//! | month name cannot be resolved | issue |
//! | year outside the supported calendar | issue |
//! | day in 1..N absent | issue |
//! | day outside 1..N present | issue |
//!
//! Duplicates are left to [`super::SequenceRule`].

use std::collections::BTreeSet;

use crate::month::{days_in_month, MonthLookup};
use crate::schedule::MonthlyPrayerSchedule;
use crate::types::{RuleFindings, RuleKind};

use super::Rule;

/// Checks the day set against the calendar month.
pub struct CompletenessRule<'a> {
    months: &'a dyn MonthLookup,
}

impl<'a> CompletenessRule<'a> {
    pub fn new(months: &'a dyn MonthLookup) -> Self {
        Self { months }
    }
}

impl Rule for CompletenessRule<'_> {
    fn kind(&self) -> RuleKind {
        RuleKind::Completeness
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());

        let Some(month) = self.months.resolve(&schedule.month) else {
            tracing::warn!(month = %schedule.month, "Month name not recognised");
            findings.issue(format!(
                "Invalid month name '{}': not a recognised calendar month",
                schedule.month
            ));
            return findings;
        };

        let Some(expected_days) = days_in_month(schedule.year, month) else {
            findings.issue(format!(
                "Invalid year {}: cannot compute days in month {}",
                schedule.year, month
            ));
            return findings;
        };

        let expected: BTreeSet<i32> = (1..=expected_days as i32).collect();
        let present: BTreeSet<i32> = schedule.days.iter().map(|d| d.day).collect();

        let missing: Vec<i32> = expected.difference(&present).copied().collect();
        let extra: Vec<i32> = present.difference(&expected).copied().collect();

        if !missing.is_empty() {
            findings.issue(format!("Missing dates: {:?}", missing));
        }

        if !extra.is_empty() {
            findings.issue(format!("Extra/invalid dates: {:?}", extra));
        }

        findings
    }
}
