//! Output formatting utilities for CLI commands.
//!
//! Provides a unified `OutputFormat` enum plus the small text helpers the
//! screens share.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

/// Output format options for CLI commands.
///
/// - `Text` for human-readable terminal output (default)
/// - `Json` for machine-readable output and scripting
/// - `Markdown` for printing or pasting a plan into documents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
    /// Markdown-formatted output (detail views).
    Markdown,
}

/// Formats a creation date the way the planner cards show it ("Mar 1, 2025").
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Truncates to at most `max_chars` characters, appending "..." when cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{kept}...")
    }
}

/// "1 objective", "3 objectives".
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("text", false).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_str("json", false).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_str("markdown", false).unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_short_date() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(short_date(&date), "Mar 1, 2025");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_chars("Дроби и доли", 8), "Дроби...");
        assert_eq!(truncate_chars("abcdef", 2), "..");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "objective", "objectives"), "1 objective");
        assert_eq!(plural(0, "objective", "objectives"), "0 objectives");
        assert_eq!(plural(4, "technique", "techniques"), "4 techniques");
    }
}
