//! Field validators.
//!
//! Each one maps a raw string to a typed value or a `Rejection`. They are
//! pure and never panic; trimming, where wanted, is up to the caller.

use crate::errors::Rejection;
use crate::models::catalog::Choice;
use crate::models::field::Field;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

pub const PARTY_SIZE: RangeInclusive<u32> = 1..=50;
pub const TABLE_NUMBER: RangeInclusive<u8> = 1..=15;
pub const RATING_SCALE: RangeInclusive<f64> = 0.0..=5.0;

pub fn name(raw: &str) -> Result<String, Rejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Rejection::MissingField(Field::Name));
    }
    Ok(trimmed.to_string())
}

/// Exactly ten ASCII digits, nothing else.
pub fn phone(raw: &str) -> Result<String, Rejection> {
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err(Rejection::FormatInvalid(Field::Phone))
    }
}

/// `YYYY-MM-DD`, today or later.
pub fn date(raw: &str, today: NaiveDate) -> Result<NaiveDate, Rejection> {
    if raw.is_empty() {
        return Err(Rejection::MissingField(Field::Date));
    }
    let d = parse_date(raw).ok_or(Rejection::FormatInvalid(Field::Date))?;
    if d < today {
        return Err(Rejection::PastDate);
    }
    Ok(d)
}

pub fn party_size(raw: &str) -> Result<u32, Rejection> {
    bounded_int(raw, Field::People, PARTY_SIZE).map(|n| n as u32)
}

pub fn table_number(raw: &str) -> Result<u8, Rejection> {
    bounded_int(raw, Field::Table, TABLE_NUMBER).map(|n| n as u8)
}

pub fn rating(raw: &str) -> Result<f64, Rejection> {
    let r: f64 = raw
        .parse()
        .map_err(|_| Rejection::FormatInvalid(Field::Rating))?;
    if !RATING_SCALE.contains(&r) {
        // NaN lands here too
        return Err(Rejection::OutOfRange(Field::Rating));
    }
    Ok(r)
}

/// Exact, case-sensitive membership in the catalog of `C`.
pub fn choice<C: Choice>(raw: &str) -> Result<C, Rejection> {
    C::from_label(raw).ok_or(Rejection::NotInCandidateSet(C::FIELD))
}

fn bounded_int<R>(raw: &str, field: Field, range: RangeInclusive<R>) -> Result<i64, Rejection>
where
    R: Into<i64> + Copy,
{
    let (lo, hi): (i64, i64) = ((*range.start()).into(), (*range.end()).into());
    let n: i64 = raw.parse().map_err(|_| Rejection::FormatInvalid(field))?;
    if n < lo || n > hi {
        return Err(Rejection::OutOfRange(field));
    }
    Ok(n)
}
