//! Seasonal Trend Rule
//!
//! **Question**: Do sunrise and sunset follow a steady seasonal trend?
//!
//! Over a month, sunrise and sunset move in one direction except around a
//! solstice. A day-to-day delta that flips sign against its neighbour, with
//! both deltas larger than `min_magnitude`, is a *reversal*. About one per
//! `tolerance_divisor` deltas is tolerated; more suggests the extraction
//! shuffled values between rows. This is a heuristic, hence a warning.

use crate::config::TrendConfig;
use crate::schedule::MonthlyPrayerSchedule;
use crate::time::minutes_since_midnight;
use crate::types::{Prayer, RuleFindings, RuleKind};

use super::{sorted_days, Rule};

const TRACKED: [Prayer; 2] = [Prayer::Sunrise, Prayer::Sunset];

/// Counts trend reversals in sunrise and sunset.
pub struct SeasonalTrendRule<'a> {
    config: &'a TrendConfig,
}

impl<'a> SeasonalTrendRule<'a> {
    pub fn new(config: &'a TrendConfig) -> Self {
        Self { config }
    }

    /// Number of sign flips between adjacent deltas where both deltas
    /// exceed the minimum magnitude.
    pub fn count_reversals(&self, minutes: &[i64]) -> usize {
        let deltas: Vec<i64> = minutes.windows(2).map(|w| w[1] - w[0]).collect();
        let floor = self.config.min_magnitude;

        deltas
            .windows(2)
            .filter(|w| {
                let (a, b) = (w[0], w[1]);
                let opposite = (a > 0 && b < 0) || (a < 0 && b > 0);
                opposite && a.abs() > floor && b.abs() > floor
            })
            .count()
    }

    /// Reversals tolerated for a series of `deltas` day-to-day changes.
    pub fn tolerance(&self, deltas: usize) -> usize {
        deltas / self.config.tolerance_divisor.max(1)
    }
}

impl Rule for SeasonalTrendRule<'_> {
    fn kind(&self) -> RuleKind {
        RuleKind::SeasonalTrend
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());

        if schedule.days.len() < self.config.min_days {
            tracing::debug!(
                days = schedule.days.len(),
                min_days = self.config.min_days,
                "Too few days for trend analysis"
            );
            return findings;
        }

        let days = sorted_days(schedule);

        for prayer in TRACKED {
            let minutes: Vec<i64> = days
                .iter()
                .map(|d| minutes_since_midnight(d.prayers.get(prayer)))
                .collect();

            let reversals = self.count_reversals(&minutes);
            let allowed = self.tolerance(minutes.len().saturating_sub(1));

            if reversals > allowed {
                findings.warn(format!(
                    "{} times show {} trend reversals, suggesting possible parsing errors",
                    prayer, reversals
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    /// One day per offset, sunrise at 05:00 plus the offset in minutes.
    fn with_sunrise_offsets(offsets: &[u32]) -> MonthlyPrayerSchedule {
        let days = offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let mut prayers = times();
                prayers.sunrise = t(&format!("{:02}:{:02}", 5 + offset / 60, offset % 60));
                day_with(i as i32 + 1, prayers)
            })
            .collect();
        month("August", 2025, days)
    }

    fn evaluate(schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let config = TrendConfig::default();
        SeasonalTrendRule::new(&config).evaluate(schedule)
    }

    #[test]
    fn test_too_few_days_is_silent() {
        let schedule = with_sunrise_offsets(&[0, 30, 0, 30, 0, 30]);
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_monotonic_month_is_clean() {
        let offsets: Vec<u32> = (0..31).map(|i| i * 2).collect();
        assert!(evaluate(&with_sunrise_offsets(&offsets)).is_clean());
    }

    #[test]
    fn test_zigzag_warns_with_count() {
        // Deltas: +10 -10 +10 -10 +10 -10 -> 5 reversals, tolerance 6/7 = 0.
        let schedule = with_sunrise_offsets(&[0, 10, 0, 10, 0, 10, 0]);
        let findings = evaluate(&schedule);
        assert!(findings.issues.is_empty());
        assert_eq!(
            findings.warnings,
            vec!["sunrise times show 5 trend reversals, suggesting possible parsing errors"]
        );
    }

    #[test]
    fn test_small_wobble_is_noise() {
        // Deltas of 2 minutes never count.
        let schedule = with_sunrise_offsets(&[0, 2, 0, 2, 0, 2, 0, 2]);
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_one_reversal_per_week_tolerated() {
        // 14 deltas -> tolerance 2. A single turning point is fine.
        let mut offsets: Vec<u32> = (0..8).map(|i| i * 3).collect();
        offsets.extend((1..8).map(|i| 21 - i * 3));
        assert_eq!(offsets.len(), 15);
        assert!(evaluate(&with_sunrise_offsets(&offsets)).is_clean());
    }

    #[test]
    fn test_sorted_before_analysis() {
        let offsets: Vec<u32> = (0..10).map(|i| i * 3).collect();
        let mut schedule = with_sunrise_offsets(&offsets);
        schedule.days.reverse();
        assert!(evaluate(&schedule).is_clean());
    }

    #[test]
    fn test_count_and_tolerance() {
        let config = TrendConfig {
            min_magnitude: 5,
            tolerance_divisor: 2,
            ..TrendConfig::default()
        };
        let rule = SeasonalTrendRule::new(&config);
        assert_eq!(rule.count_reversals(&[0, 4, 0, 4]), 0);
        assert_eq!(rule.count_reversals(&[0, 6, 0, 6]), 2);
        assert_eq!(rule.tolerance(7), 3);
        assert_eq!(rule.count_reversals(&[]), 0);
    }
}
