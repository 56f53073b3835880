use chrono::NaiveDate;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid ISO date regex"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD` parsing; chrono alone also accepts unpadded fields.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Format a date for display, falling back to ISO when the pattern is bad
/// or asks for components a plain date does not have.
pub fn format_display(d: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", d.format(fmt)) {
        Ok(()) => out,
        Err(_) => format_iso(d),
    }
}
