//! Month-name resolution.
//!
//! Extracted schedules carry the month as free text in whatever language the
//! printed timetable used. Rules resolve it through [`MonthLookup`] so new
//! locales are a table entry, not a code change.

use chrono::NaiveDate;

/// Resolves a free-text month name to a calendar month number (1..=12).
pub trait MonthLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Option<u32>;
}

const ENGLISH: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

// Only the names that differ from English.
const DANISH: [(&str, u32); 7] = [
    ("januar", 1),
    ("februar", 2),
    ("marts", 3),
    ("maj", 5),
    ("juni", 6),
    ("juli", 7),
    ("oktober", 10),
];

/// Minimum input length for prefix matching. Shorter inputs only match
/// exactly, so "ju" resolves to nothing instead of guessing June over July.
const PREFIX_LEN: usize = 3;

/// Ordered alias table with exact match first, then a three-letter prefix
/// match against the aliases in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MonthTable {
    aliases: Vec<(String, u32)>,
}

impl MonthTable {
    /// An empty table that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// English month names followed by Danish aliases.
    pub fn standard() -> Self {
        Self::empty()
            .with_aliases(ENGLISH.iter().copied())
            .with_aliases(DANISH.iter().copied())
    }

    /// Append one alias. Months outside 1..=12 are ignored.
    pub fn with_alias(mut self, name: impl AsRef<str>, month: u32) -> Self {
        self.push(name.as_ref(), month);
        self
    }

    /// Append several aliases, preserving their order.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        for (name, month) in aliases {
            self.push(name.as_ref(), month);
        }
        self
    }

    fn push(&mut self, name: &str, month: u32) {
        let name = name.trim().to_lowercase();
        if name.is_empty() || !(1..=12).contains(&month) {
            return;
        }
        if !self.aliases.iter().any(|(existing, _)| *existing == name) {
            self.aliases.push((name, month));
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl MonthLookup for MonthTable {
    fn resolve(&self, name: &str) -> Option<u32> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some((_, month)) = self.aliases.iter().find(|(alias, _)| *alias == needle) {
            return Some(*month);
        }

        if needle.chars().count() < PREFIX_LEN {
            return None;
        }
        let prefix: String = needle.chars().take(PREFIX_LEN).collect();
        self.aliases
            .iter()
            .find(|(alias, _)| alias.starts_with(&prefix))
            .map(|(_, month)| *month)
    }
}

/// Number of days in `month` of `year`, leap years included.
///
/// `None` when the month is not 1..=12 or the year is outside the range the
/// calendar can represent.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_exact_any_case() {
        let table = MonthTable::standard();
        assert_eq!(table.resolve("August"), Some(8));
        assert_eq!(table.resolve("DECEMBER"), Some(12));
        assert_eq!(table.resolve("  may "), Some(5));
    }

    #[test]
    fn test_danish_aliases() {
        let table = MonthTable::standard();
        assert_eq!(table.resolve("Marts"), Some(3));
        assert_eq!(table.resolve("maj"), Some(5));
        assert_eq!(table.resolve("Oktober"), Some(10));
    }

    #[test]
    fn test_prefix_fallback() {
        let table = MonthTable::standard();
        assert_eq!(table.resolve("Aug"), Some(8));
        assert_eq!(table.resolve("Sept."), Some(9));
        assert_eq!(table.resolve("Okt"), Some(10));
        assert_eq!(table.resolve("Janvier"), Some(1));
    }

    #[test]
    fn test_unresolvable() {
        let table = MonthTable::standard();
        assert_eq!(table.resolve("Ramadan"), None);
        assert_eq!(table.resolve(""), None);
        // Too short to prefix-match.
        assert_eq!(table.resolve("ju"), None);
    }

    #[test]
    fn test_custom_locale() {
        let table = MonthTable::standard().with_alias("Ağustos", 8);
        assert_eq!(table.resolve("ağustos"), Some(8));
        assert_eq!(MonthTable::empty().resolve("August"), None);
    }

    #[test]
    fn test_invalid_alias_ignored() {
        let table = MonthTable::empty().with_alias("smarch", 13);
        assert!(table.is_empty());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2025, 13), None);
    }
}
