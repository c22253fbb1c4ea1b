//! Point structure for representing coordinates

use std::fmt;
use crate::errors::GridResult;
use crate::utils::decimal_utils::{format_float, parse_float};

/// Index of the x coordinate (longitude)
pub const X: usize = 0;
/// Index of the y coordinate (latitude)
pub const Y: usize = 1;

/// A point whose coordinates are kept as decimal text
///
/// Storing text instead of `f64` keeps serialized values byte-for-byte
/// stable; arithmetic parses the text on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: String,
    /// Y coordinate (latitude in geographic systems)
    pub y: String,
}

impl Point {
    /// Create a new point from coordinate text
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Point { x: x.into(), y: y.into() }
    }

    /// Create a point from doubles, using their shortest round-trip text
    pub fn from_f64(x: f64, y: f64) -> Self {
        Point::new(format_float(x), format_float(y))
    }

    /// Parse both coordinates as doubles
    pub fn to_f64(&self) -> GridResult<(f64, f64)> {
        Ok((parse_float(&self.x)?, parse_float(&self.y)?))
    }

    /// Coordinate by index (`X` or `Y`)
    ///
    /// # Panics
    /// Panics if `index` is neither `X` nor `Y`.
    pub fn coord(&self, index: usize) -> &str {
        match index {
            X => &self.x,
            Y => &self.y,
            _ => panic!("coordinate index out of range: {} (expected X or Y)", index),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(&str, &str)> for Point {
    fn from((x, y): (&str, &str)) -> Self {
        Point::new(x, y)
    }
}

/// Serialize a point as "x,y"
pub fn point_to_string(point: &Point) -> String {
    point.to_string()
}
