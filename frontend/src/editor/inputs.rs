//! Input normalization for the editor forms.
//!
//! Count fields (rooms, baths, area, price) strip non-digits and collapse
//! leading zeros on every change; free-form numeric fields (stat values,
//! phone numbers) reject a disallowed input wholesale so the field keeps its
//! previous value; the features field turns comma-separated text into a
//! deduplicated tag list.

use num_format::{Buffer, Locale};
use regex::Regex;

/// Normalizes a count field: keeps digits only, collapses leading zeros,
/// returns `None` when nothing is left (the field shows empty and the draft
/// stores "unset").
pub fn parse_count(input: &str) -> Option<u64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let collapsed = digits.trim_start_matches('0');
    if collapsed.is_empty() {
        return Some(0);
    }
    collapsed.parse().ok()
}

/// Allow-list for free-form numeric fields such as the about-section stat
/// value ("20+"): digits and symbols, no letters, no whitespace.
pub fn is_numeric_symbols(input: &str) -> bool {
    Regex::new(r#"^[0-9+\-*/%()\[\]{}.,;:!@#$%^&*_=<>?'"\\|]*$"#)
        .unwrap()
        .is_match(input)
}

/// Phone fields accept digits only.
pub fn is_digits(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit())
}

/// Thousands-grouped rendering of the stored integer while editing; the
/// draft always keeps the raw number.
pub fn format_grouped(value: u64) -> String {
    let mut buf = Buffer::new();
    buf.write_formatted(&value, &Locale::id);
    buf.as_str().to_string()
}

/// Rating input: decimal in 0..=5, clamped; empty or unparseable is unset.
pub fn parse_rating(input: &str) -> Option<f32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f32>().ok().map(|r| r.clamp(0.0, 5.0))
}

/// Splits free text on commas, trims, drops empties, and appends the parts
/// that are not already present (exact string match).
pub fn add_tags(existing: &[String], raw: &str) -> Vec<String> {
    let mut tags = existing.to_vec();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == part) {
            tags.push(part.to_string());
        }
    }
    tags
}

pub fn remove_tag(existing: &[String], index: usize) -> Vec<String> {
    let mut tags = existing.to_vec();
    if index < tags.len() {
        tags.remove(index);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn count_fields_strip_and_collapse() {
        assert_eq!(parse_count("12ab3"), Some(123));
        assert_eq!(parse_count("007"), Some(7));
        assert_eq!(parse_count("000"), Some(0));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count(""), None);
        // Typing over a grouped display keeps working: separators are noise.
        assert_eq!(parse_count("1.500.000"), Some(1_500_000));
    }

    #[test]
    fn numeric_symbol_allow_list() {
        assert!(is_numeric_symbols("20+"));
        assert!(is_numeric_symbols("100%"));
        assert!(is_numeric_symbols(""));
        assert!(!is_numeric_symbols("20 tahun"));
        assert!(!is_numeric_symbols("dua puluh"));
    }

    #[test]
    fn phone_is_digits_only() {
        assert!(is_digits("628123456789"));
        assert!(is_digits(""));
        assert!(!is_digits("+62 812"));
    }

    #[test]
    fn grouped_display_matches_locale() {
        assert_eq!(format_grouped(1_500_000), "1.500.000");
        assert_eq!(format_grouped(0), "0");
    }

    #[test]
    fn rating_clamps_into_range() {
        assert_eq!(parse_rating("4.8"), Some(4.8));
        assert_eq!(parse_rating("7"), Some(5.0));
        assert_eq!(parse_rating("-1"), Some(0.0));
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("lima"), None);
    }

    #[test]
    fn tag_list_splits_trims_and_dedupes() {
        let current = tags(&["WiFi"]);
        let added = add_tags(&current, " Kolam Renang , WiFi,, AC ");
        assert_eq!(added, tags(&["WiFi", "Kolam Renang", "AC"]));
    }

    #[test]
    fn tag_removal_by_index() {
        let current = tags(&["a", "b", "c"]);
        assert_eq!(remove_tag(&current, 1), tags(&["a", "c"]));
        // Out of range leaves the list untouched.
        assert_eq!(remove_tag(&current, 9), current);
    }
}
