//! Scene rendering: turns the vector set and overlay flags into draw commands.
//!
//! This module does not touch any drawing surface. It produces an ordered list
//! of [`DrawCommand`]s in pixel space that a host executes verbatim (see
//! [`crate::paint`] for the browser canvas host). The output is a pure function
//! of its inputs, so every edit simply re-renders from scratch.
//!
//! Draw order, bottom first:
//! 1. grid lines (vertical, then horizontal)
//! 2. x and y axis arrows
//! 3. vectors `A` and `B`
//! 4. derived vectors for each active overlay
//! 5. the expression result, when enabled and present

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::camera::{Point, Viewport};
use crate::consts::{
    ARROW_ANGLE, ARROW_SIZE, AXIS_COLOR, AXIS_FONT_PX, AXIS_LINE_WIDTH, COLOR_A, COLOR_B, COLOR_RESULT, GRID_COLOR,
    GRID_COLOR_LIGHT, GRID_LINE_WIDTH, LABEL_OFFSET_X, LABEL_OFFSET_Y, MAX_GRID_LINES, VECTOR_FONT_PX, VECTOR_LINE_WIDTH,
};
use crate::doc::{self, Overlay, OverlaySpec, Styled, VectorSet};
use crate::vector::Vector2;

/// Which part of the scene a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Grid,
    Axis,
    Vector,
}

/// Filled triangle closing an arrow at its tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrowhead {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

/// Text drawn next to an arrow tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: &'static str,
    pub at: Point,
    pub font_px: f64,
}

/// One stroked segment, optionally closed by an arrowhead and labelled.
///
/// Head and label share the stroke color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub layer: Layer,
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Arrowhead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub vectors: VectorSet,
    /// Evaluated expression, if the expression parsed.
    pub result: Option<Vector2>,
    pub overlays: OverlaySpec,
}

/// Render the full scene.
#[must_use]
pub fn draw_scene(scene: &Scene, viewport: &Viewport) -> Vec<DrawCommand> {
    let mut out = grid_lines(viewport);
    out.extend(axes(viewport));
    out.extend(scene_vectors(scene).iter().map(|s| vector_arrow(viewport, s)));
    out
}

/// The vectors a scene draws, in draw order.
#[must_use]
pub fn scene_vectors(scene: &Scene) -> Vec<Styled> {
    let mut out = vec![
        Styled::new(scene.vectors.a, COLOR_A, "A"),
        Styled::new(scene.vectors.b, COLOR_B, "B"),
    ];
    for overlay in scene.overlays.enabled() {
        out.extend(doc::derived_vectors(overlay, &scene.vectors));
    }
    if scene.overlays.is_enabled(Overlay::LinearCombination) {
        if let Some(result) = scene.result {
            out.push(Styled::new(result, COLOR_RESULT, "Result"));
        }
    }
    out
}

// =============================================================
// Background
// =============================================================

/// Grid lines at every multiple of `scale` pixels across the whole surface.
///
/// A non-positive scale draws no grid, and neither does a scale so small that
/// either axis would need more than [`MAX_GRID_LINES`] lines.
#[must_use]
pub fn grid_lines(viewport: &Viewport) -> Vec<DrawCommand> {
    let Viewport { width, height, scale } = *viewport;
    if scale <= 0.0 || !scale.is_finite() {
        return Vec::new();
    }
    if width / scale > MAX_GRID_LINES || height / scale > MAX_GRID_LINES {
        tracing::debug!(width, height, scale, "grid too dense, skipped");
        return Vec::new();
    }
    let line = |from: Point, to: Point, color| DrawCommand {
        layer: Layer::Grid,
        from,
        to,
        color,
        width: GRID_LINE_WIDTH,
        head: None,
        label: None,
    };

    let mut out = Vec::new();
    for x in steps(width, scale) {
        out.push(line(Point::new(x, 0.0), Point::new(x, height), GRID_COLOR_LIGHT));
    }
    for y in steps(height, scale) {
        out.push(line(Point::new(0.0, y), Point::new(width, y), GRID_COLOR));
    }
    out
}

/// `0, step, 2·step, …` up to and including `limit`. Callers bound
/// `limit / step` by [`MAX_GRID_LINES`].
fn steps(limit: f64, step: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(move |v| *v <= limit)
}

/// The x axis (left to right) and y axis (bottom to top) through the center.
#[must_use]
pub fn axes(viewport: &Viewport) -> [DrawCommand; 2] {
    let c = viewport.center();
    let axis = |from: Point, to: Point, text| {
        let label = Label { text, at: to.offset(LABEL_OFFSET_X, LABEL_OFFSET_Y), font_px: AXIS_FONT_PX };
        arrow(Layer::Axis, from, to, AXIS_COLOR, AXIS_LINE_WIDTH, Some(label))
    };
    [
        axis(Point::new(0.0, c.y), Point::new(viewport.width, c.y), "x"),
        axis(Point::new(c.x, viewport.height), Point::new(c.x, 0.0), "y"),
    ]
}

// =============================================================
// Arrows
// =============================================================

/// An arrow from the origin to the tip of `styled.vector`, labelled past the tip.
#[must_use]
pub fn vector_arrow(viewport: &Viewport, styled: &Styled) -> DrawCommand {
    let from = viewport.center();
    let to = viewport.world_to_screen(styled.vector);
    let label = Label { text: styled.label, at: to.offset(LABEL_OFFSET_X, LABEL_OFFSET_Y), font_px: VECTOR_FONT_PX };
    arrow(Layer::Vector, from, to, styled.color, VECTOR_LINE_WIDTH, Some(label))
}

/// A segment from `from` to `to` with an arrowhead at `to`.
#[must_use]
pub fn arrow(
    layer: Layer,
    from: Point,
    to: Point,
    color: &'static str,
    width: f64,
    label: Option<Label>,
) -> DrawCommand {
    DrawCommand { layer, from, to, color, width, head: Some(arrowhead(from, to)), label }
}

/// Triangle at `to` whose sides leave the tip at ±30° from the reversed
/// arrow direction, each `ARROW_SIZE` long.
///
/// A zero-length arrow uses angle 0 (`atan2(0, 0)`).
#[must_use]
pub fn arrowhead(from: Point, to: Point) -> Arrowhead {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let back = |a: f64| Point::new(to.x - ARROW_SIZE * a.cos(), to.y - ARROW_SIZE * a.sin());
    Arrowhead { tip: to, left: back(angle - ARROW_ANGLE), right: back(angle + ARROW_ANGLE) }
}
