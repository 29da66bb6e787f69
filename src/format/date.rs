//! Date formatting.

use chrono::{DateTime, NaiveDate};
use std::str::FromStr;

use crate::format::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Friday, October 17, 2026`
    #[default]
    Long,
    /// `Oct 17, 2026`
    Short,
}

impl FromStr for DateStyle {
    type Err = std::convert::Infallible;

    /// `"long"` selects the long style; anything else is short.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("long") {
            Ok(DateStyle::Long)
        } else {
            Ok(DateStyle::Short)
        }
    }
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Long => date.format("%A, %B %-d, %Y").to_string(),
        DateStyle::Short => date.format("%b %-d, %Y").to_string(),
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp (its own calendar date is kept).
pub fn parse_date(input: &str) -> Result<NaiveDate, FormatError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| FormatError::InvalidDate(input.to_string()))
}
