//! Currency formatting.

use crate::format::FormatError;

const SYMBOLS: [(&str, &str); 10] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("CNY", "CN¥"),
    ("MXN", "MX$"),
];

const ZERO_DECIMAL: [&str; 4] = ["JPY", "KRW", "VND", "CLP"];

/// Format `amount` in `currency` (ISO 4217 code), e.g. `$1,234.56`.
///
/// Currencies without a known symbol are prefixed with their code and a
/// non-breaking space: `CHF 1,234.56`.
pub fn format_currency(amount: f64, currency: &str) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }

    let code = currency.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(FormatError::InvalidCurrency(currency.to_string()));
    }

    let digits: usize = if ZERO_DECIMAL.contains(&code.as_str()) { 0 } else { 2 };
    // `{:.*}` rounds ties to even; displayed amounts round half away from zero.
    let scale = 10f64.powi(digits as i32);
    let rounded = (amount.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", digits, rounded);
    let number = match fixed.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
        None => group_thousands(&fixed),
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let formatted = match SYMBOLS.iter().find(|(c, _)| *c == code) {
        Some((_, symbol)) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{}\u{a0}{}", sign, code, number),
    };
    Ok(formatted)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd() {
        assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
        assert_eq!(format_currency(0.0, "usd").unwrap(), "$0.00");
        assert_eq!(format_currency(1_000_000.0, "USD").unwrap(), "$1,000,000.00");
        assert_eq!(format_currency(0.125, "USD").unwrap(), "$0.13");
        assert_eq!(format_currency(0.375, "USD").unwrap(), "$0.38");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-42.1, "EUR").unwrap(), "-€42.10");
    }

    #[test]
    fn test_zero_decimal_currency() {
        assert_eq!(format_currency(1234.6, "JPY").unwrap(), "¥1,235");
        assert_eq!(format_currency(2.5, "JPY").unwrap(), "¥3");
        assert_eq!(format_currency(-0.5, "KRW").unwrap(), "-₩1");
    }

    #[test]
    fn test_code_fallback() {
        assert_eq!(format_currency(950.0, "CHF").unwrap(), "CHF\u{a0}950.00");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            format_currency(1.0, "DOLLARS"),
            Err(FormatError::InvalidCurrency("DOLLARS".to_string()))
        );
        assert!(matches!(format_currency(f64::NAN, "USD"), Err(FormatError::NonFinite(_))));
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
