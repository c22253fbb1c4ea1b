//! Coordinate handling for grid rectangles
//!
//! This module provides the point and rect types with their text form,
//! pixel grid sizing, decimal rounding and WGS84/GCJ02 conversion.

mod point;
mod rect;
mod grid;
mod precision;
mod transform;
mod crs;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::{Point, point_to_string, X, Y};
pub use self::rect::{
    Rect, parse_rect, rect_to_string, bot_top_to_top_bot, top_bot_to_bot_top,
    RECT_LEFT_BOT, RECT_RIGHT_TOP, RECT_LEFT_TOP, RECT_RIGHT_BOT,
};
pub use self::grid::{range_width, range_height};
pub use self::precision::{
    quantize_decimal, quantize_with, precision_scale, point_precision, round_point_precision,
    DEFAULT_PRECISION,
};
pub use self::transform::{
    wgs84_to_gcj02, gcj02_to_wgs84, transform_lat, transform_lng, out_of_china,
    wgs84_rect_to_gcj02_rect, gcj02_rect_to_wgs84_rect, CoordinateTransformer,
};
pub use self::crs::CoordinateSystem;
