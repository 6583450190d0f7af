//! 2D canvas rendering
//!
//! Pure function of simulation state to drawing commands: clear, ground
//! line, fading trail polyline, character disc. The renderer holds no state
//! of its own and only ever reads position/trail from the simulations.

use crate::consts::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, Element};

#[cfg(target_arch = "wasm32")]
use crate::error::SetupError;
#[cfg(target_arch = "wasm32")]
use crate::sim::{BallisticJump, KinematicJump, Trail};

/// Reduce a `#RRGGBB` color to an `rgba(...)` string with the given alpha.
/// Anything that is not a 7-character hex color passes through unchanged.
pub fn apply_alpha(color: &str, alpha: f32) -> String {
    if let Some(rgb) = parse_hex_rgb(color) {
        let (r, g, b) = rgb;
        format!("rgba({r}, {g}, {b}, {alpha})")
    } else {
        color.to_owned()
    }
}

fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    if !color.starts_with('#') || color.len() != 7 {
        return None;
    }
    let r = u8::from_str_radix(color.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(color.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(color.get(5..7)?, 16).ok()?;
    Some((r, g, b))
}

/// Look up a canvas by element id, size it, and return its 2d context.
/// A missing element or context is a fatal startup error.
#[cfg(target_arch = "wasm32")]
pub fn get_canvas_context(id: &str) -> Result<CanvasRenderingContext2d, SetupError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SetupError::DocumentUnavailable)?;

    let canvas: web_sys::HtmlCanvasElement = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| SetupError::CanvasMissing(id.to_owned()))?;

    canvas.set_width(CANVAS_WIDTH as u32);
    canvas.set_height(CANVAS_HEIGHT as u32);

    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into().ok())
        .ok_or_else(|| SetupError::ContextUnavailable(id.to_owned()))
}

/// Draw both simulations onto their canvases
#[cfg(target_arch = "wasm32")]
pub fn render_simulations(
    ctx_a: &CanvasRenderingContext2d,
    ctx_b: &CanvasRenderingContext2d,
    sim_a: &KinematicJump,
    sim_b: &BallisticJump,
) {
    draw_scene(ctx_a, CHARACTER_COLOR_A, &sim_a.trail, sim_a.position);
    draw_scene(ctx_b, CHARACTER_COLOR_B, &sim_b.trail, sim_b.position);
}

/// Replace an info panel's content with one `<div>` per line.
/// A missing panel is silently skipped.
#[cfg(target_arch = "wasm32")]
pub fn render_info(element: Option<&Element>, lines: &[String]) {
    let Some(element) = element else {
        return;
    };
    let html: String = lines
        .iter()
        .map(|line| format!("<div>{line}</div>"))
        .collect();
    element.set_inner_html(&html);
}

#[cfg(target_arch = "wasm32")]
fn draw_scene(ctx: &CanvasRenderingContext2d, color: &str, trail: &Trail, position: glam::Vec2) {
    ctx.clear_rect(0.0, 0.0, f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
    draw_ground(ctx);
    draw_trail(ctx, trail, color);
    draw_character(ctx, position, color);
}

#[cfg(target_arch = "wasm32")]
fn draw_ground(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(GROUND_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, f64::from(GROUND_Y));
    ctx.line_to(f64::from(CANVAS_WIDTH), f64::from(GROUND_Y));
    ctx.stroke();
}

#[cfg(target_arch = "wasm32")]
fn draw_trail(ctx: &CanvasRenderingContext2d, trail: &Trail, color: &str) {
    if trail.len() < 2 {
        return;
    }
    ctx.set_stroke_style_str(&apply_alpha(color, TRAIL_ALPHA));
    ctx.set_line_width(2.0);
    ctx.begin_path();
    let mut points = trail.iter();
    if let Some(first) = points.next() {
        ctx.move_to(f64::from(first.x), f64::from(first.y));
    }
    for point in points {
        ctx.line_to(f64::from(point.x), f64::from(point.y));
    }
    ctx.stroke();
}

#[cfg(target_arch = "wasm32")]
fn draw_character(ctx: &CanvasRenderingContext2d, position: glam::Vec2, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(
        f64::from(position.x),
        f64::from(position.y),
        f64::from(CHARACTER_SIZE),
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
}
