//! Logical viewport and client/logical coordinate mapping.

use serde::{Deserialize, Serialize};

use super::Point;

/// Viewport extents in logical units.
///
/// Logical space has its origin at the centre of the viewport with the y-axis
/// pointing up. Client space has its origin at the top-left corner with the
/// y-axis pointing down. Extents must fit in `i32`; `EngineConfig::validate`
/// rejects anything larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 768,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    #[inline]
    fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Convert a client-space position to logical space.
    pub fn to_logical(&self, client: Point) -> Point {
        Point::new(client.x - self.half_width(), self.half_height() - client.y)
    }

    /// Convert a logical position to client space.
    pub fn to_client(&self, logical: Point) -> Point {
        Point::new(logical.x + self.half_width(), self.half_height() - logical.y)
    }

    /// Logical x coordinates of the left and right client edges.
    pub fn x_extent(&self) -> (i32, i32) {
        (
            self.to_logical(Point::new(0, 0)).x,
            self.to_logical(Point::new(self.width as i32, 0)).x,
        )
    }

    /// Uniform sampling bounds for initial anchor points: `(x, y)` half extents.
    pub fn anchor_bounds(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}
