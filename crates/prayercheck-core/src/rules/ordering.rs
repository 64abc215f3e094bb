//! Intra-day Order Rule
//!
//! **Question**: Do the prayers of each day follow their natural order?
//!
//! Within a day, subh < sunrise < dhuhr < sunset < maghrib must hold
//! strictly; every broken adjacent pair is an issue. Midnight belongs to the
//! following night and is usually smaller than maghrib on the clock, so it
//! is left out of the chain. A midnight that has *not* wrapped past maghrib
//! and still reads later than the morning cutoff was most likely OCR'd as an
//! afternoon or evening time, which is worth a warning.

use chrono::NaiveTime;

use crate::schedule::MonthlyPrayerSchedule;
use crate::time::format_clock;
use crate::types::{Prayer, RuleFindings, RuleKind};

use super::Rule;

/// Checks the order of prayers within each day.
pub struct IntraDayOrderRule {
    midnight_unusual_after: NaiveTime,
}

impl IntraDayOrderRule {
    pub fn new(midnight_unusual_after: NaiveTime) -> Self {
        Self {
            midnight_unusual_after,
        }
    }
}

impl Rule for IntraDayOrderRule {
    fn kind(&self) -> RuleKind {
        RuleKind::IntraDayOrder
    }

    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings {
        let mut findings = RuleFindings::new(self.kind());

        for day in &schedule.days {
            let prayers = &day.prayers;

            for pair in Prayer::SAME_DAY_CHAIN.windows(2) {
                let (earlier, later) = (pair[0], pair[1]);
                let (earlier_time, later_time) = (prayers.get(earlier), prayers.get(later));

                if earlier_time >= later_time {
                    findings.issue(format!(
                        "Date {}: {} ({}) should be before {} ({})",
                        day.day,
                        earlier,
                        format_clock(earlier_time),
                        later,
                        format_clock(later_time)
                    ));
                }
            }

            let wrapped = prayers.maghrib > prayers.midnight;
            if !wrapped && prayers.midnight > self.midnight_unusual_after {
                findings.warn(format!(
                    "Date {}: Midnight time ({}) seems unusual",
                    day.day,
                    format_clock(prayers.midnight)
                ));
            }
        }

        findings
    }
}
