//! Utility modules for common functionality
//!
//! This module provides logging and number conversion helpers used throughout the crate.

pub mod logger;
pub(crate) mod decimal_utils;
