//! Tests for decimal rounding

use rust_decimal::Decimal;
use crate::errors::GridError;
use crate::coordinate::{
    point_precision, precision_scale, quantize_decimal, quantize_with, round_point_precision,
    Point, DEFAULT_PRECISION,
};

#[test]
fn test_quantize_default_precision() {
    assert_eq!(quantize_decimal("1.2345678", DEFAULT_PRECISION).unwrap(), "1.234568");
}

#[test]
fn test_quantize_pads_short_values() {
    assert_eq!(quantize_decimal("1.5", DEFAULT_PRECISION).unwrap(), "1.500000");
    assert_eq!(quantize_decimal("116", DEFAULT_PRECISION).unwrap(), "116.000000");
}

#[test]
fn test_quantize_half_even() {
    assert_eq!(quantize_decimal("0.0000005", DEFAULT_PRECISION).unwrap(), "0.000000");
    assert_eq!(quantize_decimal("0.0000015", DEFAULT_PRECISION).unwrap(), "0.000002");
    assert_eq!(quantize_decimal("2.5", "0").unwrap(), "2");
    assert_eq!(quantize_decimal("3.5", "0").unwrap(), "4");
}

#[test]
fn test_quantize_with_scale() {
    let value = Decimal::new(123456789, 8);
    assert_eq!(quantize_with(value, 2).unwrap().to_string(), "1.23");
    assert_eq!(quantize_with(value, 10).unwrap().to_string(), "1.2345678900");
}

#[test]
fn test_quantize_overflow_when_digits_do_not_fit() {
    // 24 integer digits plus 6 fractional digits exceed the 28 available
    match quantize_decimal("123456789012345678901234.5", DEFAULT_PRECISION) {
        Err(GridError::Overflow(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    let value = Decimal::from_i128_with_scale(1234567890123456789012345, 0);
    assert!(matches!(quantize_with(value, 6), Err(GridError::Overflow(_))));
    assert_eq!(quantize_with(value, 3).unwrap().scale(), 3);
}

#[test]
fn test_quantize_keeps_negative_zero() {
    assert_eq!(quantize_decimal("-0.0000001", DEFAULT_PRECISION).unwrap(), "-0.000000");
    assert_eq!(quantize_decimal("-0.4", "0").unwrap(), "-0");
    assert_eq!(quantize_decimal("0.4", "0").unwrap(), "0");
}

#[test]
fn test_precision_scale() {
    assert_eq!(precision_scale("0.000000").unwrap(), 6);
    assert_eq!(precision_scale("0").unwrap(), 0);
    assert!(precision_scale("six").is_err());
}

#[test]
fn test_round_point_precision() {
    let point = Point::new("116.40367162595768", "39.91063350638631");
    assert_eq!(round_point_precision(&point).unwrap(), Point::new("116.403672", "39.910634"));
}

#[test]
fn test_point_precision_custom() {
    let point = Point::new("116.40367162595768", "39.91063350638631");
    assert_eq!(point_precision(&point, "0.01").unwrap(), Point::new("116.40", "39.91"));
}

#[test]
fn test_quantize_rejects_garbage() {
    assert!(quantize_decimal("north", DEFAULT_PRECISION).is_err());
}
