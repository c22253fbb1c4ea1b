//! Geodetic reference systems handled by the transformer

use crate::errors::{GridError, GridResult};

/// Identifier for the supported coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326), the GPS datum
    WGS84,
    /// GCJ-02, the offset datum required for maps of mainland China
    GCJ02,
}

impl CoordinateSystem {
    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::GCJ02 => "GCJ-02".to_string(),
        }
    }

    /// Parse a coordinate system name (e.g. "wgs84", "EPSG:4326", "gcj02")
    pub fn from_string(crs_str: &str) -> GridResult<CoordinateSystem> {
        let normalized = crs_str.trim().to_uppercase().replace(['-', '_', ' '], "");

        match normalized.as_str() {
            "WGS84" | "EPSG:4326" | "4326" => Ok(CoordinateSystem::WGS84),
            "GCJ02" | "MARS" => Ok(CoordinateSystem::GCJ02),
            _ => Err(GridError::GenericError(format!("Unsupported CRS: {}", crs_str))),
        }
    }
}
