//! Placeholder and formatting rules shared by every view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const UNTITLED: &str = "Untitled Article";
pub const NO_SUMMARY: &str = "No summary available.";
pub const DATE_UNKNOWN: &str = "Date unknown";
pub const UNKNOWN_BLOG: &str = "Unknown blog";
pub const NO_LINK: &str = "#";
pub const STATS_UNAVAILABLE: &str = "N/A";

pub const SUMMARY_MAX_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Cuts summaries longer than [`SUMMARY_MAX_CHARS`] and appends an ellipsis.
/// Shorter summaries come back untouched.
pub fn truncate_summary(summary: Option<&str>) -> String {
    let summary = match summary {
        Some(s) if !s.trim().is_empty() => s,
        _ => return NO_SUMMARY.to_string(),
    };

    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        None => summary.to_string(),
        Some((cut, _)) => format!("{}{}", summary[..cut].trim(), ELLIPSIS),
    }
}

/// Parses the handful of date shapes the indexer emits.
pub fn parse_published(published: &str) -> Option<NaiveDate> {
    let published = published.trim();
    if published.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(published) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(published, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(published) {
        return Some(dt.date_naive());
    }

    // Anything else that still starts with a calendar date.
    published
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Long US date ("January 5, 2024"), or the placeholder when the value is
/// missing or unreadable.
pub fn format_published(published: Option<&str>) -> String {
    match published.and_then(parse_published) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            if let Some(raw) = published.filter(|p| !p.trim().is_empty()) {
                tracing::debug!("Unrecognized publication date: {}", raw);
            }
            DATE_UNKNOWN.to_string()
        }
    }
}

/// Groups digits in threes, e.g. `12345` -> `"12,345"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `"1 article"`, `"1,500 articles"`.
pub fn format_article_count(count: u64) -> String {
    let noun = if count == 1 { "article" } else { "articles" };
    format!("{} {}", format_count(count), noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_placeholder() {
        assert_eq!(truncate_summary(None), NO_SUMMARY);
        assert_eq!(truncate_summary(Some("")), NO_SUMMARY);
        assert_eq!(truncate_summary(Some("   ")), NO_SUMMARY);
    }

    #[test]
    fn test_short_summary_unchanged() {
        let exact = "a".repeat(SUMMARY_MAX_CHARS);
        assert_eq!(truncate_summary(Some(&exact)), exact);
        assert_eq!(truncate_summary(Some(" padded ")), " padded ");
    }

    #[test]
    fn test_long_summary_truncated() {
        let long = "b".repeat(SUMMARY_MAX_CHARS + 1);
        let out = truncate_summary(Some(&long));
        assert_eq!(out, format!("{}...", "b".repeat(SUMMARY_MAX_CHARS)));
    }

    #[test]
    fn test_truncation_trims_whitespace_at_cut() {
        let long = format!("{}    {}", "c".repeat(197), "tail".repeat(20));
        let out = truncate_summary(Some(&long));
        assert_eq!(out, format!("{}...", "c".repeat(197)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let long = "é".repeat(250);
        let out = truncate_summary(Some(&long));
        assert_eq!(out.chars().count(), SUMMARY_MAX_CHARS + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_format_published() {
        assert_eq!(format_published(Some("2024-01-05")), "January 5, 2024");
        assert_eq!(format_published(Some("2024-01-05T09:30:00")), "January 5, 2024");
        assert_eq!(format_published(Some("2024-01-05 09:30:00")), "January 5, 2024");
        assert_eq!(format_published(Some("2023-12-31T23:59:59+02:00")), "December 31, 2023");
        assert_eq!(format_published(Some("Fri, 05 Jan 2024 10:00:00 +0000")), "January 5, 2024");
        assert_eq!(format_published(Some("2024-03-09T08:00:00.123456")), "March 9, 2024");
    }

    #[test]
    fn test_format_published_fallback() {
        assert_eq!(format_published(None), DATE_UNKNOWN);
        assert_eq!(format_published(Some("")), DATE_UNKNOWN);
        assert_eq!(format_published(Some("someday")), DATE_UNKNOWN);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_article_count() {
        assert_eq!(format_article_count(0), "0 articles");
        assert_eq!(format_article_count(1), "1 article");
        assert_eq!(format_article_count(2), "2 articles");
        assert_eq!(format_article_count(1500), "1,500 articles");
    }
}
