/// Date normalization for CV entries
///
/// This module handles:
/// - Parsing `YYYY-MM-DD` and `YYYY/MM/DD` date strings
/// - Long-form output ("August 6, 2023") for citations and grants
/// - Abbreviated output ("Aug 2023") for employment ranges
use chrono::NaiveDate;

/// Parse a date string, tolerating both `-` and `/` delimiters
fn parse(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&raw.replace('/', "-"), "%Y-%m-%d").ok()
}

/// Format a date as "August 6, 2023"
///
/// A missing or empty date renders as an empty string. Text chrono cannot
/// parse (hand-written ranges like "Jan-Mar 2020") passes through verbatim;
/// free text is legal data here, not a fault.
pub fn long_date(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.is_empty() => match parse(s) {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => s.to_string(),
        },
        _ => String::new(),
    }
}

/// Format a date as "Aug 2023" for employment ranges
///
/// A missing or empty date means an open-ended position and renders as
/// "present". Unparseable text passes through verbatim.
pub fn month_year(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.is_empty() => match parse(s) {
            Some(date) => date.format("%b %Y").to_string(),
            None => s.to_string(),
        },
        _ => "present".to_string(),
    }
}

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;
