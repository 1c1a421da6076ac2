//! Small string formatters shared by the pages.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static NOT_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// `"2024-02-05"` → `"February 5, 2024"`.
///
/// Input that is not an ISO calendar date comes back unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_owned(),
    }
}

/// US dollars with thousands separators: `199900` → `"$1,999.00"`.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `12543` → `"12,543"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Lower-cases `text`, keeps ASCII word characters, and joins the words
/// with single hyphens.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NOT_SLUG.replace_all(&lower, "");
    let joined = SEPARATORS.replace_all(&kept, "-");
    joined.trim_matches('-').to_owned()
}

/// The first `max` characters plus `"..."`, or `text` itself when it fits.
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_owned(),
        Some((end, _)) => format!("{}...", text[..end].trim()),
    }
}

/// Drops every `<...>` tag, leaving the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_543), "12,543");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2024-02-05"), "February 5, 2024");
        assert_eq!(format_date("2023-12-25"), "December 25, 2023");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-02-30"), "2024-02-30");
    }

    #[test]
    fn prices() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(2900), "$29.00");
        assert_eq!(format_price(99_900), "$999.00");
        assert_eq!(format_price(199_900), "$1,999.00");
        assert_eq!(format_price(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Next.js 15 -- App_Router  "), "nextjs-15-app-router");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("hello world", 6), "hello...");
        assert_eq!(truncate_text("héllo", 2), "hé...");
    }

    #[test]
    fn tags() {
        assert_eq!(strip_tags("<p>Hi <strong>there</strong></p>"), "Hi there");
        assert_eq!(strip_tags("no markup"), "no markup");
    }
}
