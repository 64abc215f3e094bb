//! Core types shared by the rules, the checker and the report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six daily entries of a timetable, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Subh,
    Sunrise,
    Dhuhr,
    Sunset,
    Maghrib,
    Midnight,
}

impl Prayer {
    /// All prayers, in timetable order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Subh,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Midnight,
    ];

    /// The prayers that must be strictly increasing within one day.
    /// Midnight belongs to the following night and is left out.
    pub const SAME_DAY_CHAIN: [Prayer; 5] = [
        Prayer::Subh,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Sunset,
        Prayer::Maghrib,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Subh => "subh",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Sunset => "sunset",
            Prayer::Maghrib => "maghrib",
            Prayer::Midnight => "midnight",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six rules, in the order the checker runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Completeness,
    Sequence,
    IntraDayOrder,
    InterDayJump,
    RangePlausibility,
    SeasonalTrend,
}

impl RuleKind {
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Completeness,
        RuleKind::Sequence,
        RuleKind::IntraDayOrder,
        RuleKind::InterDayJump,
        RuleKind::RangePlausibility,
        RuleKind::SeasonalTrend,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Completeness => "completeness",
            RuleKind::Sequence => "sequence",
            RuleKind::IntraDayOrder => "intra_day_order",
            RuleKind::InterDayJump => "inter_day_jump",
            RuleKind::RangePlausibility => "range_plausibility",
            RuleKind::SeasonalTrend => "seasonal_trend",
        }
    }

    /// The question this rule answers about a schedule.
    pub fn question(&self) -> &'static str {
        match self {
            RuleKind::Completeness => "Is every day of the month present, and nothing outside it?",
            RuleKind::Sequence => "Is each day listed once, in calendar order?",
            RuleKind::IntraDayOrder => "Do the prayers of each day follow their natural order?",
            RuleKind::InterDayJump => "Does each prayer drift smoothly from one day to the next?",
            RuleKind::RangePlausibility => "Does each time fall in a plausible window?",
            RuleKind::SeasonalTrend => "Do sunrise and sunset follow a steady seasonal trend?",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What one rule found.
///
/// Issues invalidate the schedule; warnings are advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFindings {
    pub rule: RuleKind,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleFindings {
    pub fn new(rule: RuleKind) -> Self {
        Self {
            rule,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }
}

/// What the caller should do with an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// No issues and no warnings.
    Accept,
    /// No issues, but at least one warning worth a human glance.
    AcceptWithCaveats,
    /// At least one issue: reject the extraction and retry.
    Reject,
}

/// Outcome of checking one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// True iff `issues` is empty. Warnings never affect it.
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub total_days: usize,
    pub month: String,
    pub year: i32,
    pub city: String,
}

impl CheckResult {
    pub fn verdict(&self) -> Verdict {
        if !self.issues.is_empty() {
            Verdict::Reject
        } else if !self.warnings.is_empty() {
            Verdict::AcceptWithCaveats
        } else {
            Verdict::Accept
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::render_report(self))
    }
}
