//! Attendance dates travel as strings in either `DD/MM/YYYY` (legacy client
//! pickers) or `YYYY-MM-DD` (ISO inputs). Normalization is a textual
//! rearrangement, deliberately not a conversion through a timezone-aware
//! type, so the stored day never drifts from what the client displayed.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("unrecognized date format: {0:?} (expected DD/MM/YYYY or YYYY-MM-DD)")]
    Unrecognized(String),
}

fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Normalizes a date string to canonical `YYYY-MM-DD` form.
///
/// Accepts `DD/MM/YYYY` and `YYYY-MM-DD`; everything else, including the
/// empty string, is rejected. Purely textual: `99/99/2024` normalizes to
/// `2024-99-99` here and is caught by [`parse_date`] when a real calendar
/// date is required.
pub fn normalize_date(raw: &str) -> Result<String, DateFormatError> {
    if let [day, month, year] = raw.split('/').collect::<Vec<_>>()[..] {
        if day.len() == 2 && month.len() == 2 && year.len() == 4 && [day, month, year].iter().all(|p| all_digits(p)) {
            return Ok(format!("{year}-{month}-{day}"));
        }
    }
    if let [year, month, day] = raw.split('-').collect::<Vec<_>>()[..] {
        if year.len() == 4 && month.len() == 2 && day.len() == 2 && [year, month, day].iter().all(|p| all_digits(p)) {
            return Ok(raw.to_string());
        }
    }
    Err(DateFormatError::Unrecognized(raw.to_string()))
}

/// Normalizes and parses a date string for storage binding.
///
/// A string that passes the textual check but names an impossible calendar
/// date (month 13, day 32) is rejected here.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let canonical = normalize_date(raw)?;
    NaiveDate::parse_from_str(&canonical, "%Y-%m-%d")
        .map_err(|_| DateFormatError::Unrecognized(raw.to_string()))
}
