//! The six rules run by the checker.
//!
//! Each rule looks at the whole schedule independently and returns its own
//! [`RuleFindings`]; rules never see each other's output.
//!
//! | Rule | Finds | Tier |
//! |------|-------|------|
//! | [`CompletenessRule`] | missing or out-of-month days, unknown month | issue |
//! | [`SequenceRule`] | duplicate days / out-of-order rows | issue / warning |
//! | [`IntraDayOrderRule`] | prayers out of order within a day / odd midnight | issue / warning |
//! | [`InterDayJumpRule`] | large day-to-day jumps | warning |
//! | [`RangeRule`] | times outside plausible windows | warning |
//! | [`SeasonalTrendRule`] | erratic sunrise/sunset trend | warning |

mod completeness;
mod jumps;
mod ordering;
mod ranges;
mod sequence;
mod trend;

pub use completeness::CompletenessRule;
pub use jumps::InterDayJumpRule;
pub use ordering::IntraDayOrderRule;
pub use ranges::RangeRule;
pub use sequence::SequenceRule;
pub use trend::SeasonalTrendRule;

use crate::schedule::{DailyPrayerSchedule, MonthlyPrayerSchedule};
use crate::types::{RuleFindings, RuleKind};

/// A single sanity rule.
pub trait Rule {
    /// Which rule this is.
    fn kind(&self) -> RuleKind;

    /// Inspect the schedule. Must not fail: every anomaly is a finding.
    fn evaluate(&self, schedule: &MonthlyPrayerSchedule) -> RuleFindings;

    /// The question this rule answers.
    fn question(&self) -> &'static str {
        self.kind().question()
    }
}

/// Days ordered by day-of-month without touching the schedule.
/// Rows sharing a day keep their received order.
pub(crate) fn sorted_days(schedule: &MonthlyPrayerSchedule) -> Vec<&DailyPrayerSchedule> {
    let mut days: Vec<&DailyPrayerSchedule> = schedule.days.iter().collect();
    days.sort_by_key(|d| d.day);
    days
}
