//! Sequence Rule
//!
//! **Question**: Is each day listed once, in calendar order?
//!
//! Duplicate days are an issue. Rows delivered out of order are only a
//! warning: everything downstream sorts by day first.

use std::collections::BTreeMap;

use crate::schedule::MonthlyPrayerSchedule;
use crate::types::{RuleFindings, RuleKind};

use super::Rule;

/// Checks for repeated and out-of-order day numbers.
pub struct SequenceRule;

impl SequenceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SequenceRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Sequence
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());

        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for day in &schedule.days {
            *counts.entry(day.day).or_default() += 1;
        }

        let duplicates: Vec<i32> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(day, _)| day)
            .collect();

        if !duplicates.is_empty() {
            findings.issue(format!("Duplicate dates found: {:?}", duplicates));
        }

        let in_order = schedule.days.windows(2).all(|pair| pair[0].day <= pair[1].day);
        if !in_order {
            findings.warn("Dates are not in sequential order");
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_ordered_unique_is_clean() {
        assert!(SequenceRule::new().evaluate(&flat_month("August", 2025, 31)).is_clean());
    }

    #[test]
    fn test_duplicate_day_three() {
        let mut schedule = flat_month("August", 2025, 31);
        schedule.days.insert(3, day(3));

        let findings = SequenceRule::new().evaluate(&schedule);
        assert_eq!(findings.issues.len(), 1);
        assert!(findings.issues[0].contains('3'));
        // Inserted right after the original day 3, so order still holds.
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn test_each_duplicate_named_once() {
        let schedule = month(
            "August",
            2025,
            vec![day(1), day(2), day(2), day(2), day(5), day(5)],
        );
        let findings = SequenceRule::new().evaluate(&schedule);
        assert_eq!(findings.issues, vec!["Duplicate dates found: [2, 5]"]);
    }

    #[test]
    fn test_out_of_order_is_warning_only() {
        let schedule = month("August", 2025, vec![day(1), day(3), day(2)]);
        let findings = SequenceRule::new().evaluate(&schedule);
        assert!(findings.issues.is_empty());
        assert_eq!(findings.warnings, vec!["Dates are not in sequential order"]);
    }

    #[test]
    fn test_empty_schedule_is_clean() {
        assert!(SequenceRule::new().evaluate(&month("August", 2025, vec![])).is_clean());
    }
}
