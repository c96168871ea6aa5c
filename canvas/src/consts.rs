//! Shared numeric and style constants for the canvas crate.

use std::f64::consts::PI;

// ── Surface ─────────────────────────────────────────────────────

/// Logical width and height of the square drawing surface.
pub const CANVAS_SIZE: f64 = 700.0;

/// Grid spacing in pixels per data unit.
pub const GRID_SCALE: f64 = 50.0;

/// Most grid lines along one axis. A denser grid is not drawn.
pub const MAX_GRID_LINES: f64 = 10_000.0;

// ── Arrows ──────────────────────────────────────────────────────

/// Arrowhead back-stroke length in pixels.
pub const ARROW_SIZE: f64 = 10.0;

/// Arrowhead half-angle in radians (30°).
pub const ARROW_ANGLE: f64 = PI / 6.0;

/// Offset from an arrow tip to its label anchor, in pixels (x right, y up on screen).
pub const LABEL_OFFSET_X: f64 = 5.0;
pub const LABEL_OFFSET_Y: f64 = -5.0;

// ── Strokes ─────────────────────────────────────────────────────

pub const GRID_LINE_WIDTH: f64 = 3.0;
pub const AXIS_LINE_WIDTH: f64 = 2.0;
pub const VECTOR_LINE_WIDTH: f64 = 3.0;

pub const AXIS_FONT_PX: f64 = 14.0;
pub const VECTOR_FONT_PX: f64 = 16.0;

// ── Colors ──────────────────────────────────────────────────────

/// Horizontal grid lines.
pub const GRID_COLOR: &str = "#ccc";
/// Vertical grid lines (lighter).
pub const GRID_COLOR_LIGHT: &str = "#ddd";
pub const AXIS_COLOR: &str = "#000";

pub const COLOR_A: &str = "red";
pub const COLOR_B: &str = "blue";
pub const COLOR_NORMAL_A: &str = "orange";
pub const COLOR_NORMAL_B: &str = "cyan";
pub const COLOR_PROJ_A_ON_B: &str = "purple";
pub const COLOR_PROJ_B_ON_A: &str = "brown";
pub const COLOR_RESULT: &str = "green";
