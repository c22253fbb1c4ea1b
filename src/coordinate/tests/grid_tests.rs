//! Tests for pixel grid dimensions

use crate::coordinate::{range_height, range_width, Point, Rect};
use crate::errors::GridError;

fn rect(x1: &str, y1: &str, x2: &str, y2: &str) -> Rect {
    Rect::new(Point::new(x1, y1), Point::new(x2, y2))
}

#[test]
fn test_range_width() {
    assert_eq!(range_width(&rect("0", "0", "10", "0"), "5").unwrap(), "2");
}

#[test]
fn test_range_height() {
    assert_eq!(range_height(&rect("0", "0", "0", "10"), "2.5").unwrap(), "4");
}

#[test]
fn test_geographic_extent() {
    let beijing = rect("116.1", "39.7", "116.7", "40.15");
    assert_eq!(range_width(&beijing, "0.04").unwrap(), "15");
    assert_eq!(range_height(&beijing, "0.01").unwrap(), "45");
    // 0.6 / 0.007 = 85.714...
    assert_eq!(range_width(&beijing, "0.007").unwrap(), "86");
}

#[test]
fn test_rounds_half_to_even() {
    assert_eq!(range_width(&rect("0", "0", "25", "0"), "10").unwrap(), "2");
    assert_eq!(range_width(&rect("0", "0", "35", "0"), "10").unwrap(), "4");
}

#[test]
fn test_reversed_rect_gives_negative_count() {
    assert_eq!(range_width(&rect("10", "0", "0", "0"), "5").unwrap(), "-2");
}

#[test]
fn test_reversed_rect_rounding_to_zero_keeps_sign() {
    assert_eq!(range_width(&rect("0.05", "0", "0", "0"), "1").unwrap(), "-0");
    assert_eq!(range_height(&rect("0", "0.3", "0", "0"), "1").unwrap(), "-0");
    assert_eq!(range_width(&rect("0", "0", "0.05", "0"), "1").unwrap(), "0");
}

#[test]
fn test_zero_pixel_size() {
    let result = range_width(&rect("0", "0", "10", "0"), "0");
    assert!(matches!(result, Err(GridError::DivisionByZero)));
}

#[test]
fn test_non_numeric_input() {
    assert!(matches!(
        range_height(&rect("0", "x", "10", "10"), "1"),
        Err(GridError::InvalidDecimal(_))
    ));
    assert!(matches!(
        range_width(&rect("0", "0", "10", "10"), "wide"),
        Err(GridError::InvalidDecimal(_))
    ));
}
