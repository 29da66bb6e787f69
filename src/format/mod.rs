//! Display formatting for money and dates, in the en-US style the pages use.

pub mod currency;
pub mod date;

pub use currency::format_currency;
pub use date::{format_date, parse_date, DateStyle};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("invalid currency code '{0}'")]
    InvalidCurrency(String),

    #[error("amount {0} is not a finite number")]
    NonFinite(f64),

    #[error("invalid date '{0}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),
}
