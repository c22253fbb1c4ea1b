//! Rectangle structure and its "x1,y1|x2,y2" text form

use std::fmt;
use std::ops::Index;
use log::{debug, warn};
use super::point::{Point, X, Y};

/// Slot of the left-bottom corner in a bot-top rect
pub const RECT_LEFT_BOT: usize = 0;
/// Slot of the right-top corner in a bot-top rect
pub const RECT_RIGHT_TOP: usize = 1;
/// Slot of the left-top corner in a top-bot rect
pub const RECT_LEFT_TOP: usize = 0;
/// Slot of the right-bottom corner in a top-bot rect
pub const RECT_RIGHT_BOT: usize = 1;

/// Separator between the two corners of a serialized rect
pub const CORNER_SEPARATOR: char = '|';
/// Separator between the coordinates of a serialized point
pub const COORD_SEPARATOR: char = ',';

/// An axis-aligned rectangle given by two corner points
///
/// Whether the corners are (left-bottom, right-top) or (left-top, right-bottom)
/// is a convention the caller keeps track of. Use the `RECT_*` constants to
/// address the corners.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The two corners in convention order
    pub corners: [Point; 2],
}

impl Rect {
    /// Create a rect from its two corners
    pub fn new(first: Point, second: Point) -> Self {
        Rect { corners: [first, second] }
    }

    /// Borrow both corners
    pub fn corners(&self) -> &[Point; 2] {
        &self.corners
    }

    /// Parse a serialized rect; see [`parse_rect`]
    pub fn from_string(rect_str: &str) -> Option<Self> {
        parse_rect(rect_str)
    }
}

impl Index<usize> for Rect {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.corners[index]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.corners[0], CORNER_SEPARATOR, self.corners[1])
    }
}

/// Serialize a rect as "x1,y1|x2,y2"
pub fn rect_to_string(rect: &Rect) -> String {
    rect.to_string()
}

/// Parse "x1,y1|x2,y2" into a rect
///
/// Returns `None` unless the text holds exactly two corners of exactly two
/// coordinates each. Coordinates are not checked for being numeric.
pub fn parse_rect(rect_str: &str) -> Option<Rect> {
    let parts: Vec<&str> = rect_str.split(CORNER_SEPARATOR).collect();
    if parts.len() != 2 {
        warn!("Rejecting rect '{}': expected 2 corners, found {}", rect_str, parts.len());
        return None;
    }

    let mut points = Vec::with_capacity(2);
    for part in parts {
        let coords: Vec<&str> = part.split(COORD_SEPARATOR).collect();
        if coords.len() != 2 {
            warn!("Rejecting rect '{}': corner '{}' has {} coordinates", rect_str, part, coords.len());
            return None;
        }
        points.push(Point::new(coords[X], coords[Y]));
    }

    let second = points.pop()?;
    let first = points.pop()?;
    Some(Rect::new(first, second))
}

/// Convert a (left-bottom, right-top) rect to (left-top, right-bottom)
pub fn bot_top_to_top_bot(bot_top_rect: &Rect) -> Rect {
    let left_bot = &bot_top_rect[RECT_LEFT_BOT];
    let right_top = &bot_top_rect[RECT_RIGHT_TOP];

    let top_bot = Rect::new(
        Point::new(left_bot.x.clone(), right_top.y.clone()),
        Point::new(right_top.x.clone(), left_bot.y.clone()),
    );
    debug!("Converted bot-top rect {} to top-bot rect {}", bot_top_rect, top_bot);
    top_bot
}

/// Convert a (left-top, right-bottom) rect to (left-bottom, right-top)
pub fn top_bot_to_bot_top(top_bot_rect: &Rect) -> Rect {
    let left_top = &top_bot_rect[RECT_LEFT_TOP];
    let right_bot = &top_bot_rect[RECT_RIGHT_BOT];

    let bot_top = Rect::new(
        Point::new(left_top.x.clone(), right_bot.y.clone()),
        Point::new(right_bot.x.clone(), left_top.y.clone()),
    );
    debug!("Converted top-bot rect {} to bot-top rect {}", top_bot_rect, bot_top);
    bot_top
}
