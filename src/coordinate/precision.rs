//! Exact decimal rounding for stored coordinates

use rust_decimal::{Decimal, RoundingStrategy};
use crate::errors::{GridError, GridResult};
use crate::utils::decimal_utils::parse_decimal;
use super::point::Point;

/// Six fractional digits, the precision coordinates are stored with
pub const DEFAULT_PRECISION: &str = "0.000000";

/// Round `value` to `scale` fractional digits, half to even
///
/// The result always carries exactly `scale` fractional digits, padding with zeros,
/// and keeps the sign of `value` when it rounds to zero. Values with too many
/// integer digits to hold `scale` fractional digits are an `Overflow` error.
pub fn quantize_with(value: Decimal, scale: u32) -> GridResult<Decimal> {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(scale);

    if rounded.scale() != scale {
        return Err(GridError::Overflow(format!(
            "{} cannot carry {} fractional digits", value, scale
        )));
    }

    if rounded.is_zero() && value.is_sign_negative() {
        rounded.set_sign_negative(true);
    }

    Ok(rounded)
}

/// Number of fractional digits in a precision pattern such as "0.000000"
pub fn precision_scale(precision: &str) -> GridResult<u32> {
    Ok(parse_decimal(precision)?.scale())
}

/// Round decimal text to the number of fractional digits in `precision`
///
/// # Examples
/// ```
/// use geogrid::coordinate::quantize_decimal;
/// assert_eq!(quantize_decimal("1.2345678", "0.000000").unwrap(), "1.234568");
/// ```
pub fn quantize_decimal(text: &str, precision: &str) -> GridResult<String> {
    let value = parse_decimal(text)?;
    let scale = precision_scale(precision)?;
    Ok(quantize_with(value, scale)?.to_string())
}

/// Round both coordinates of a point to `precision`
pub fn point_precision(point: &Point, precision: &str) -> GridResult<Point> {
    Ok(Point::new(
        quantize_decimal(&point.x, precision)?,
        quantize_decimal(&point.y, precision)?,
    ))
}

/// Round both coordinates of a point to six fractional digits
pub fn round_point_precision(point: &Point) -> GridResult<Point> {
    point_precision(point, DEFAULT_PRECISION)
}
