//! Pixel grid dimensions of a rectangle
//!
//! A bot-top rect covered by pixels of a fixed geographic size spans a whole
//! number of pixels along each axis. The count is computed in exact decimal
//! arithmetic so long coordinates don't lose digits, then rounded half to even.
//! A reversed rect that rounds to no pixels keeps its sign and reads "-0".

use rust_decimal::Decimal;
use log::debug;
use crate::errors::{GridError, GridResult};
use crate::utils::decimal_utils::parse_decimal;
use super::point::{X, Y};
use super::precision::quantize_with;
use super::rect::{Rect, RECT_LEFT_BOT, RECT_RIGHT_TOP};

/// Number of pixels of size `pixel_size` spanning `axis` of a bot-top rect
fn pixel_span(bot_top_rect: &Rect, pixel_size: &str, axis: usize) -> GridResult<Decimal> {
    let low = parse_decimal(bot_top_rect[RECT_LEFT_BOT].coord(axis))?;
    let high = parse_decimal(bot_top_rect[RECT_RIGHT_TOP].coord(axis))?;
    let size = parse_decimal(pixel_size)?;

    if size.is_zero() {
        return Err(GridError::DivisionByZero);
    }

    let length = high
        .checked_sub(low)
        .ok_or_else(|| GridError::Overflow(format!("{} - {}", high, low)))?;
    let span = length
        .checked_div(size)
        .ok_or_else(|| GridError::Overflow(format!("{} / {}", length, size)))?;

    quantize_with(span, 0)
}

/// Width of a bot-top rect in pixels of width `pixel_width`
pub fn range_width(bot_top_rect: &Rect, pixel_width: &str) -> GridResult<String> {
    let width = pixel_span(bot_top_rect, pixel_width, X)?;
    debug!("Rect {} is {} pixels wide at pixel width {}", bot_top_rect, width, pixel_width);
    Ok(width.to_string())
}

/// Height of a bot-top rect in pixels of height `pixel_height`
pub fn range_height(bot_top_rect: &Rect, pixel_height: &str) -> GridResult<String> {
    let height = pixel_span(bot_top_rect, pixel_height, Y)?;
    debug!("Rect {} is {} pixels high at pixel height {}", bot_top_rect, height, pixel_height);
    Ok(height.to_string())
}
