//! Checker: runs the rules and aggregates their findings.
//!
//! Rules run in a fixed order so that issues tend to surface before the
//! finer-grained warnings in the report. The order carries no data
//! dependency: each rule sees only the input schedule.
//!
//! The findings accumulator is local to each [`SanityChecker::check`] call.
//! A checker holds only immutable configuration and may be shared freely.

use crate::config::CheckerConfig;
use crate::month::{MonthLookup, MonthTable};
use crate::rules::{
    CompletenessRule, InterDayJumpRule, IntraDayOrderRule, RangeRule, Rule, SeasonalTrendRule,
    SequenceRule,
};
use crate::schedule::MonthlyPrayerSchedule;
use crate::types::{CheckResult, RuleFindings};

/// Runs the six rules over a schedule.
pub struct SanityChecker {
    config: CheckerConfig,
    months: Box<dyn MonthLookup>,
}

impl SanityChecker {
    /// A checker with default thresholds and the English/Danish month table.
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    /// A checker with custom thresholds. Month aliases from the config are
    /// appended to the built-in table.
    pub fn with_config(config: CheckerConfig) -> Self {
        let months = MonthTable::standard().with_aliases(
            config
                .month_aliases
                .iter()
                .map(|(name, month)| (name.as_str(), *month)),
        );

        Self {
            config,
            months: Box::new(months),
        }
    }

    /// Replace month resolution entirely.
    pub fn with_month_lookup(mut self, months: impl MonthLookup + 'static) -> Self {
        self.months = Box::new(months);
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn months(&self) -> &dyn MonthLookup {
        self.months.as_ref()
    }

    /// Run every rule and return each rule's findings, in run order.
    pub fn run_rules(&self, schedule: &MonthlyPrayerSchedule) -> Vec<RuleFindings> {
        let completeness = CompletenessRule::new(self.months.as_ref());
        let sequence = SequenceRule::new();
        let ordering = IntraDayOrderRule::new(self.config.midnight_unusual_after);
        let jumps = InterDayJumpRule::new(&self.config.drift);
        let ranges = RangeRule::new(&self.config.windows);
        let trend = SeasonalTrendRule::new(&self.config.trend);

        let rules: [&dyn Rule; 6] = [&completeness, &sequence, &ordering, &jumps, &ranges, &trend];

        rules
            .iter()
            .map(|rule| {
                let findings = rule.evaluate(schedule);
                tracing::debug!(
                    rule = %findings.rule,
                    question = rule.question(),
                    issues = findings.issues.len(),
                    warnings = findings.warnings.len(),
                    "Rule evaluated"
                );
                findings
            })
            .collect()
    }

    /// Check a schedule.
    ///
    /// Never fails: every anomaly becomes an issue or a warning.
    pub fn check(&self, schedule: &MonthlyPrayerSchedule) -> CheckResult {
        Self::aggregate(schedule, &self.run_rules(schedule))
    }

    /// Merge per-rule findings, in the order given, into one result.
    pub fn aggregate(schedule: &MonthlyPrayerSchedule, findings: &[RuleFindings]) -> CheckResult {
        let issues: Vec<String> = findings.iter().flat_map(|f| f.issues.iter().cloned()).collect();
        let warnings: Vec<String> = findings
            .iter()
            .flat_map(|f| f.warnings.iter().cloned())
            .collect();

        let result = CheckResult {
            is_valid: issues.is_empty(),
            issues,
            warnings,
            total_days: schedule.days.len(),
            month: schedule.month.clone(),
            year: schedule.year,
            city: schedule.city.clone(),
        };

        tracing::info!(
            city = %result.city,
            month = %result.month,
            year = result.year,
            verdict = ?result.verdict(),
            issues = result.issues.len(),
            warnings = result.warnings.len(),
            "Schedule checked"
        );

        result
    }
}

impl Default for SanityChecker {
    fn default() -> Self {
        Self::new()
    }
}
