pub mod errors;
pub mod utils;
pub mod config;
pub mod coordinate;
pub mod api;

pub use crate::api::GeoGrid;

pub use config::GridConfig;
pub use errors::{GridError, GridResult};
pub use coordinate::{Point, Rect, CoordinateTransformer, CoordinateSystem};
