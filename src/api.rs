use log::{debug, info};
use crate::config::{default_config, GridConfig};
use crate::coordinate::{
    bot_top_to_top_bot, parse_rect, point_precision, range_height, range_width, rect_to_string,
    CoordinateSystem, CoordinateTransformer, Rect,
};
use crate::errors::{GridError, GridResult};
use crate::utils::logger::Logger;

/// Main interface to the geogrid library
///
/// Works on serialized "x1,y1|x2,y2" rects and rounds converted coordinates
/// to the configured precision.
pub struct GeoGrid {
    config: GridConfig,
    transformer: CoordinateTransformer,
}

impl Default for GeoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoGrid {
    /// Create a GeoGrid instance with the compiled-in configuration
    pub fn new() -> Self {
        Self::with_config(default_config().clone())
    }

    /// Create a GeoGrid instance with an explicit configuration
    pub fn with_config(config: GridConfig) -> Self {
        info!("Initializing geogrid with precision {}", config.precision);
        GeoGrid {
            config,
            transformer: CoordinateTransformer,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Install the crate logger at the configured level
    pub fn init_logging(&self) {
        Logger::init_global_logger(self.config.log_level);
    }

    /// Parse a serialized rect, or `None` if it is malformed
    pub fn parse_rect(&self, rect_str: &str) -> Option<Rect> {
        parse_rect(rect_str)
    }

    /// Serialize a rect as "x1,y1|x2,y2"
    pub fn format_rect(&self, rect: &Rect) -> String {
        rect_to_string(rect)
    }

    /// Pixel width and height of a serialized bot-top rect
    ///
    /// # Arguments
    /// * `rect_str` - Rect in "left,bottom|right,top" form
    /// * `pixel_width` - Width of one pixel in coordinate units
    /// * `pixel_height` - Height of one pixel in coordinate units
    ///
    /// # Returns
    /// (width, height) in pixels, or an error if the rect or sizes are malformed
    pub fn grid_size(&self, rect_str: &str, pixel_width: &str, pixel_height: &str) -> GridResult<(String, String)> {
        let rect = self.require_rect(rect_str)?;
        let width = range_width(&rect, pixel_width)?;
        let height = range_height(&rect, pixel_height)?;

        debug!("Grid for {} is {}x{} pixels", rect_str, width, height);
        Ok((width, height))
    }

    /// Convert a serialized bot-top rect to top-bot order
    pub fn to_top_bot(&self, rect_str: &str) -> GridResult<String> {
        let rect = self.require_rect(rect_str)?;
        Ok(rect_to_string(&bot_top_to_top_bot(&rect)))
    }

    /// Convert a serialized WGS84 rect to GCJ02
    pub fn wgs84_rect_to_gcj02(&self, rect_str: &str) -> GridResult<String> {
        self.convert_rect(rect_str, CoordinateSystem::WGS84, CoordinateSystem::GCJ02)
    }

    /// Convert a serialized GCJ02 rect to WGS84
    pub fn gcj02_rect_to_wgs84(&self, rect_str: &str) -> GridResult<String> {
        self.convert_rect(rect_str, CoordinateSystem::GCJ02, CoordinateSystem::WGS84)
    }

    fn convert_rect(&self, rect_str: &str, from_crs: CoordinateSystem, to_crs: CoordinateSystem) -> GridResult<String> {
        let rect = self.require_rect(rect_str)?;
        let [first, second] = rect.corners();

        let converted = Rect::new(
            point_precision(&self.transformer.transform_point(first, &from_crs, &to_crs)?, &self.config.precision)?,
            point_precision(&self.transformer.transform_point(second, &from_crs, &to_crs)?, &self.config.precision)?,
        );

        debug!("Converted {} rect {} to {} rect {}",
               from_crs.description(), rect_str, to_crs.description(), converted);
        Ok(rect_to_string(&converted))
    }

    fn require_rect(&self, rect_str: &str) -> GridResult<Rect> {
        parse_rect(rect_str)
            .ok_or_else(|| GridError::GenericError(format!("Malformed rect: '{}'", rect_str)))
    }
}
