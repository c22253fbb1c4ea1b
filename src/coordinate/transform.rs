//! WGS84 / GCJ02 coordinate conversion
//!
//! GCJ02 ("Mars coordinates") is WGS84 shifted by a locally varying empirical
//! offset. The forward direction is a closed-form formula; the reverse here is
//! its first-order approximation, which leaves a residual below a micro-degree
//! inside mainland China.

use log::debug;
use crate::errors::{GridError, GridResult};
use super::crs::CoordinateSystem;
use super::point::Point;
use super::precision::round_point_precision;
use super::rect::Rect;

/// Pi as written in the published formula
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f64 = 3.1415926535897932384626;
/// Eccentricity squared of the Krasovsky 1940 ellipsoid
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;
/// Semi-major axis of the Krasovsky 1940 ellipsoid in meters
pub const A: f64 = 6378245.0;

/// Latitude offset polynomial, evaluated relative to (105, 35)
pub fn transform_lat(lng: f64, lat: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * lng + 3.0 * lat + 0.2 * lat * lat + 0.1 * lng * lat + 0.2 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude offset polynomial, evaluated relative to (105, 35)
pub fn transform_lng(lng: f64, lat: f64) -> f64 {
    let mut ret = 300.0 + lng + 2.0 * lat + 0.1 * lng * lng + 0.1 * lng * lat + 0.1 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lng * PI).sin() + 40.0 * (lng / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lng / 12.0 * PI).sin() + 300.0 * (lng / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// GCJ02 offset (d_lng, d_lat) in degrees at a WGS84 position
fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let dlat = transform_lat(lng - 105.0, lat - 35.0);
    let dlng = transform_lng(lng - 105.0, lat - 35.0);

    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (A / sqrtmagic * radlat.cos() * PI);
    (dlng, dlat)
}

/// Convert a WGS84 position to GCJ02
///
/// # Returns
/// A Point holding (longitude, latitude) as shortest round-trip text
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> Point {
    let (dlng, dlat) = offset(lng, lat);
    let mglng = lng + dlng;
    let mglat = lat + dlat;

    debug!("Transformed WGS84 ({}, {}) to GCJ02 ({}, {})", lng, lat, mglng, mglat);
    Point::from_f64(mglng, mglat)
}

/// Convert a GCJ02 position back to WGS84
///
/// Reflects the position across its own forward offset, which is a linear
/// approximation of the inverse and not exact.
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> Point {
    let (dlng, dlat) = offset(lng, lat);
    let mglng = lng + dlng;
    let mglat = lat + dlat;
    let wgs_lng = lng * 2.0 - mglng;
    let wgs_lat = lat * 2.0 - mglat;

    debug!("Transformed GCJ02 ({}, {}) to WGS84 ({}, {})", lng, lat, wgs_lng, wgs_lat);
    Point::from_f64(wgs_lng, wgs_lat)
}

/// Whether a position lies outside the region GCJ02 is defined for
///
/// The transforms above never consult this; it is for callers that want to
/// skip conversion abroad.
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    !(72.004..=137.8347).contains(&lng) || !(0.8293..=55.8271).contains(&lat)
}

/// Apply a point conversion to both corners and round them to six places
fn convert_rect(rect: &Rect, convert: fn(f64, f64) -> Point) -> GridResult<Rect> {
    let [first, second] = rect.corners();
    let (first_lng, first_lat) = first.to_f64()?;
    let (second_lng, second_lat) = second.to_f64()?;

    Ok(Rect::new(
        round_point_precision(&convert(first_lng, first_lat))?,
        round_point_precision(&convert(second_lng, second_lat))?,
    ))
}

/// Convert both corners of a WGS84 rect to GCJ02, rounded to six places
pub fn wgs84_rect_to_gcj02_rect(wgs84_rect: &Rect) -> GridResult<Rect> {
    convert_rect(wgs84_rect, wgs84_to_gcj02)
}

/// Convert both corners of a GCJ02 rect to WGS84, rounded to six places
pub fn gcj02_rect_to_wgs84_rect(gcj02_rect: &Rect) -> GridResult<Rect> {
    convert_rect(gcj02_rect, gcj02_to_wgs84)
}

/// Transformer for converting between coordinate systems
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Transform a point between coordinate systems
    ///
    /// The result keeps full float precision; round it with
    /// [`point_precision`](super::precision::point_precision) before storing.
    pub fn transform_point(&self, point: &Point, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GridResult<Point> {
        if from_crs == to_crs {
            return Ok(point.clone());
        }

        let (lng, lat) = point.to_f64()?;
        match (from_crs, to_crs) {
            (CoordinateSystem::WGS84, CoordinateSystem::GCJ02) => Ok(wgs84_to_gcj02(lng, lat)),
            (CoordinateSystem::GCJ02, CoordinateSystem::WGS84) => Ok(gcj02_to_wgs84(lng, lat)),
            _ => Err(GridError::GenericError(format!(
                "Unsupported coordinate transformation from {} to {}",
                from_crs.description(), to_crs.description()
            ))),
        }
    }

    /// Transform a rect between coordinate systems, rounding corners to six places
    pub fn transform_rect(&self, rect: &Rect, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GridResult<Rect> {
        if from_crs == to_crs {
            return Ok(rect.clone());
        }

        match (from_crs, to_crs) {
            (CoordinateSystem::WGS84, CoordinateSystem::GCJ02) => wgs84_rect_to_gcj02_rect(rect),
            (CoordinateSystem::GCJ02, CoordinateSystem::WGS84) => gcj02_rect_to_wgs84_rect(rect),
            _ => Err(GridError::GenericError(format!(
                "Unsupported coordinate transformation from {} to {}",
                from_crs.description(), to_crs.description()
            ))),
        }
    }
}
