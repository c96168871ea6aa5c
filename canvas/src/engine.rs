use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Viewport;
use crate::doc::{Overlay, OverlaySpec, Readout, VectorName, VectorSet, overlay_previews};
use crate::expr::Expression;
use crate::input::{Axis, VectorInput};
use crate::paint;
use crate::render::{self, DrawCommand, Scene};
use crate::vector::Vector2;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Default expression shown on first load.
pub const DEFAULT_EXPRESSION: &str = "A + B";

/// Actions returned from edits for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The edit was ignored; nothing changed.
    None,
    /// State changed; the host should call `render`.
    RenderNeeded,
}

/// Everything the host displays for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// Readouts for A and B, in that order.
    pub readouts: [Readout; 2],
    /// Readout of the evaluated expression, if it parsed.
    pub result: Option<Readout>,
    /// Derived vector behind each overlay toggle.
    pub previews: Vec<(Overlay, Vector2)>,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Every edit replaces a snapshot wholesale; [`EngineCore::frame`] recomputes
/// every derived value from the current snapshots.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub input: VectorInput,
    pub vectors: VectorSet,
    pub expression: String,
    pub overlays: OverlaySpec,
    pub viewport: Viewport,
}

impl Default for EngineCore {
    fn default() -> Self {
        let vectors = VectorSet::default();
        Self {
            input: VectorInput::from_set(&vectors),
            vectors,
            expression: DEFAULT_EXPRESSION.to_owned(),
            overlays: OverlaySpec::default(),
            viewport: Viewport::default(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace both vectors and reset the text fields to match.
    pub fn load_vectors(&mut self, vectors: VectorSet) -> Action {
        self.input = VectorInput::from_set(&vectors);
        self.vectors = vectors;
        Action::RenderNeeded
    }

    /// Apply a keystroke to one component field.
    pub fn set_component(&mut self, name: VectorName, axis: Axis, text: &str) -> Action {
        match self.input.set_component(name, axis, text) {
            Some(vectors) => {
                self.vectors = vectors;
                Action::RenderNeeded
            }
            None => {
                tracing::debug!(%name, ?axis, text, "component edit rejected");
                Action::None
            }
        }
    }

    pub fn set_expression(&mut self, text: &str) -> Action {
        text.clone_into(&mut self.expression);
        if Expression::parse(text).is_none() {
            tracing::debug!(text, "expression has no result");
        }
        Action::RenderNeeded
    }

    pub fn set_overlay(&mut self, overlay: Overlay, enabled: bool) -> Action {
        let next = self.overlays.with(overlay, enabled);
        if next == self.overlays {
            return Action::None;
        }
        self.overlays = next;
        Action::RenderNeeded
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) -> Action {
        self.overlays = self.overlays.toggled(overlay);
        Action::RenderNeeded
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> Action {
        if viewport == self.viewport {
            return Action::None;
        }
        self.viewport = viewport;
        Action::RenderNeeded
    }

    // --- Queries ---

    /// The evaluated expression against the current vectors.
    #[must_use]
    pub fn result(&self) -> Option<Vector2> {
        Expression::parse(&self.expression).map(|e| e.evaluate(&self.vectors))
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene { vectors: self.vectors, result: self.result(), overlays: self.overlays }
    }

    /// Recompute the full frame from the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let scene = self.scene();
        Frame {
            commands: render::draw_scene(&scene, &self.viewport),
            readouts: [Readout::of(self.vectors.a), Readout::of(self.vectors.b)],
            result: scene.result.map(Readout::of),
            previews: overlay_previews(&self.vectors),
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sized to the
    /// element's current dimensions.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut core = EngineCore::new();
        core.viewport.width = f64::from(canvas.width());
        core.viewport.height = f64::from(canvas.height());
        Self { canvas, core }
    }

    // --- Delegated data inputs ---

    pub fn load_vectors(&mut self, vectors: VectorSet) -> Action {
        self.core.load_vectors(vectors)
    }

    pub fn set_component(&mut self, name: VectorName, axis: Axis, text: &str) -> Action {
        self.core.set_component(name, axis, text)
    }

    pub fn set_expression(&mut self, text: &str) -> Action {
        self.core.set_expression(text)
    }

    pub fn set_overlay(&mut self, overlay: Overlay, enabled: bool) -> Action {
        self.core.set_overlay(overlay, enabled)
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) -> Action {
        self.core.toggle_overlay(overlay)
    }

    /// Resize the canvas element and the logical viewport together.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Action {
        self.canvas.set_width(px(viewport.width));
        self.canvas.set_height(px(viewport.height));
        self.core.set_viewport(viewport)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<Frame, JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let frame = self.core.frame();
        paint::paint(&ctx, &self.core.viewport, &frame.commands)?;
        Ok(frame)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn result(&self) -> Option<Vector2> {
        self.core.result()
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.core.frame()
    }
}

/// Canvas element sizes are whole pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn px(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
