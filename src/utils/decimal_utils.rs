//! Number conversion helpers
//!
//! Coordinates travel through the crate as text. These helpers turn that text
//! into exact decimals or floats, and turn floats back into text.

use std::str::FromStr;
use rust_decimal::Decimal;
use crate::errors::{GridError, GridResult};

/// Parse coordinate text into an exact decimal
///
/// Surrounding whitespace is ignored and exponent notation ("1.5e-3") is accepted.
pub fn parse_decimal(text: &str) -> GridResult<Decimal> {
    let trimmed = text.trim();

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };

    parsed.map_err(|_| GridError::InvalidDecimal(text.to_string()))
}

/// Parse coordinate text into a double
pub fn parse_float(text: &str) -> GridResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| GridError::InvalidFloat(text.to_string()))
}

/// Render a double as the shortest text that reads back to the same value
///
/// Integral values keep a trailing ".0" so the text still reads as a float.
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_keeps_scale() {
        let value = parse_decimal("116.397428").unwrap();
        assert_eq!(value.to_string(), "116.397428");
        assert_eq!(value.scale(), 6);
    }

    #[test]
    fn test_parse_decimal_trims_and_reads_exponents() {
        assert_eq!(parse_decimal("  2.5 ").unwrap().to_string(), "2.5");
        assert_eq!(parse_decimal("1.5e-3").unwrap(), Decimal::new(15, 4));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        match parse_decimal("abc") {
            Err(GridError::InvalidDecimal(s)) => assert_eq!(s, "abc"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(" 39.90923").unwrap(), 39.90923);
        assert!(parse_float("").is_err());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(116.40367162595768), "116.40367162595768");
        assert_eq!(format_float(105.0), "105.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.1), "0.1");
    }
}
