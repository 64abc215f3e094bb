//! Human-readable rendering of a [`CheckResult`].

use crate::types::CheckResult;

/// Render a multi-line report.
///
/// Issues and warnings appear in the order the checker produced them.
/// Empty sections are omitted.
pub fn render_report(result: &CheckResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== PRAYER TIMES SANITY CHECK REPORT ===".to_string());
    lines.push(format!(
        "Schedule: {} - {} {}",
        result.city, result.month, result.year
    ));
    lines.push(format!("Total days parsed: {}", result.total_days));
    lines.push(String::new());

    if result.is_valid {
        lines.push("✅ OVERALL STATUS: PASSED".to_string());
    } else {
        lines.push("❌ OVERALL STATUS: FAILED".to_string());
    }
    lines.push(String::new());

    if !result.issues.is_empty() {
        lines.push("🚨 CRITICAL ISSUES:".to_string());
        lines.extend(result.issues.iter().map(|issue| format!("  • {}", issue)));
        lines.push(String::new());
    }

    if !result.warnings.is_empty() {
        lines.push("⚠️  WARNINGS:".to_string());
        lines.extend(result.warnings.iter().map(|warning| format!("  • {}", warning)));
        lines.push(String::new());
    }

    if result.issues.is_empty() && result.warnings.is_empty() {
        lines.push("✨ No issues or warnings found! The parsing looks accurate.".to_string());
    }

    lines.join("\n")
}
