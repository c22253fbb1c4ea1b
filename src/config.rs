//! Runtime settings for grid and coordinate processing
//!
//! Defaults ship in `geogrid.toml` at the crate root and are compiled in.
//! Callers can load their own file with [`GridConfig::from_file`].

use std::fs;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::{warn, LevelFilter};
use crate::coordinate::{precision_scale, DEFAULT_PRECISION};
use crate::errors::{GridError, GridResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: GridConfig = {
        let content = include_str!("../geogrid.toml");
        GridConfig::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse embedded grid configuration: {}", e);
            GridConfig::default()
        })
    };
}

/// The compiled-in configuration
pub fn default_config() -> &'static GridConfig {
    &DEFAULT_CONFIG
}

/// Settings shared by the [`GeoGrid`](crate::GeoGrid) facade
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Quantization pattern for stored coordinates, e.g. "0.000000"
    pub precision: String,
    /// Highest level the crate logger emits
    pub log_level: LevelFilter,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            precision: DEFAULT_PRECISION.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl GridConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Keys that are absent keep their default value.
    pub fn from_str(content: &str) -> GridResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GridError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = GridConfig::default();

        if let Some(precision) = Self::read_pattern(&toml_value, "precision")? {
            config.precision = precision;
        }

        if let Some(value) = toml_value.get("log_level") {
            let level = value
                .as_str()
                .ok_or_else(|| GridError::ConfigError("log_level must be a string".to_string()))?;
            config.log_level = LevelFilter::from_str(level)
                .map_err(|_| GridError::ConfigError(format!("Unknown log level: {}", level)))?;
        }

        Ok(config)
    }

    /// Helper to read and validate a precision pattern
    fn read_pattern(toml_value: &toml::Value, key: &str) -> GridResult<Option<String>> {
        let value = match toml_value.get(key) {
            Some(value) => value,
            None => return Ok(None),
        };

        let pattern = value
            .as_str()
            .ok_or_else(|| GridError::ConfigError(format!("{} must be a string", key)))?;
        precision_scale(pattern)
            .map_err(|e| GridError::ConfigError(format!("{}: {}", key, e)))?;

        Ok(Some(pattern.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GridResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Number of fractional digits in the coordinate precision
    pub fn precision_scale(&self) -> GridResult<u32> {
        precision_scale(&self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = default_config();
        assert_eq!(config.precision, "0.000000");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.precision_scale().unwrap(), 6);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = GridConfig::from_str("precision = \"0.0001\"").unwrap();
        assert_eq!(config.precision, "0.0001");
        assert_eq!(config.precision_scale().unwrap(), 4);
    }

    #[test]
    fn test_log_level() {
        let config = GridConfig::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(GridConfig::from_str("precision = \"fine\""), Err(GridError::ConfigError(_))));
        assert!(matches!(GridConfig::from_str("precision = 6"), Err(GridError::ConfigError(_))));
        assert!(matches!(GridConfig::from_str("log_level = \"loud\""), Err(GridError::ConfigError(_))));
        assert!(matches!(GridConfig::from_str("precision = "), Err(GridError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(GridConfig::from_file("/nonexistent/geogrid.toml"), Err(GridError::IoError(_))));
    }
}
