//! Paint: executes draw commands on a browser 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It draws exactly what [`crate::render`] produced and makes no layout
//! decisions of its own.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Viewport;
use crate::render::{Arrowhead, DrawCommand, Label};

/// Clear the surface and draw `commands` in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, viewport: &Viewport, commands: &[DrawCommand]) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    for cmd in commands {
        paint_command(ctx, cmd)?;
    }
    Ok(())
}

fn paint_command(ctx: &CanvasRenderingContext2d, cmd: &DrawCommand) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(cmd.color);
    ctx.set_fill_style_str(cmd.color);
    ctx.set_line_width(cmd.width);

    ctx.begin_path();
    ctx.move_to(cmd.from.x, cmd.from.y);
    ctx.line_to(cmd.to.x, cmd.to.y);
    ctx.stroke();

    if let Some(head) = &cmd.head {
        fill_arrowhead(ctx, head);
    }
    if let Some(label) = &cmd.label {
        fill_label(ctx, label)?;
    }

    ctx.restore();
    Ok(())
}

fn fill_arrowhead(ctx: &CanvasRenderingContext2d, head: &Arrowhead) {
    ctx.begin_path();
    ctx.move_to(head.tip.x, head.tip.y);
    ctx.line_to(head.left.x, head.left.y);
    ctx.line_to(head.right.x, head.right.y);
    ctx.close_path();
    ctx.fill();
}

fn fill_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    ctx.set_font(&format!("{:.0}px sans-serif", label.font_px));
    ctx.fill_text(label.text, label.at.x, label.at.y)
}
