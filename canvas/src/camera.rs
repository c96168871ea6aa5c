//! Pixel points and the data-to-pixel viewport mapping.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_SIZE, GRID_SCALE};
use crate::vector::Vector2;

/// A point in pixel space (origin top-left, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)` pixels.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// The drawing surface and its data-to-pixel mapping.
///
/// Data origin sits at the surface center. `scale` is pixels per data unit.
/// Data y grows upward, pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: CANVAS_SIZE, height: CANVAS_SIZE, scale: GRID_SCALE }
    }
}

impl Viewport {
    /// A square viewport of side `size`.
    #[must_use]
    pub fn square(size: f64, scale: f64) -> Self {
        Self { width: size, height: size, scale }
    }

    /// Pixel position of the data origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a data-space vector tip to pixel coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Vector2) -> Point {
        let c = self.center();
        Point {
            x: world.x.mul_add(self.scale, c.x),
            y: (-world.y).mul_add(self.scale, c.y),
        }
    }

    /// Convert a pixel position back to data space.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Vector2 {
        let c = self.center();
        Vector2 {
            x: (screen.x - c.x) / self.scale,
            y: (c.y - screen.y) / self.scale,
        }
    }
}
