//! Rendering: draws a [`Scene`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads a scene built by [`crate::scene::build`] and produces pixels; it
//! never mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::feed::Placeholder;
use crate::scene::{CardSprite, PlaceholderSprite, Scene};

/// Hard drop-shadow offset in world units.
const SHADOW_OFFSET: f64 = 8.0;
const BORDER_WIDTH: f64 = 4.0;
const CARD_PADDING: f64 = 16.0;
const NAME_FONT_PX: f64 = 18.0;
const MESSAGE_FONT_PX: f64 = 16.0;
const PLACEHOLDER_SHADOW: &str = "#cccccc";
const INK: &str = "#000000";
const PAPER: &str = "#ffffff";

/// Draw the full scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(scene.camera.pan_x, scene.camera.pan_y)?;
    ctx.scale(scene.camera.scale, scene.camera.scale)?;

    // Sequence order: later cards paint over earlier ones.
    for card in &scene.cards {
        draw_card(ctx, card, scene.card_width, scene.card_height)?;
    }

    if let Some(placeholder) = &scene.placeholder {
        draw_placeholder(ctx, placeholder)?;
    }

    Ok(())
}

// =============================================================
// Cards
// =============================================================

fn draw_card(ctx: &CanvasRenderingContext2d, card: &CardSprite, width: f64, height: f64) -> Result<(), JsValue> {
    with_saved(ctx, |ctx| draw_card_body(ctx, card, width, height))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_card_body(ctx: &CanvasRenderingContext2d, card: &CardSprite, width: f64, height: f64) -> Result<(), JsValue> {
    translate_and_rotate(ctx, card.placement.x, card.placement.y, width, height, card.placement.rotation_deg)?;

    let hw = width / 2.0;
    let hh = height / 2.0;

    ctx.set_fill_style_str(INK);
    ctx.fill_rect(-hw + SHADOW_OFFSET, -hh + SHADOW_OFFSET, width, height);

    ctx.set_fill_style_str(&card.theme.background);
    ctx.fill_rect(-hw, -hh, width, height);

    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(BORDER_WIDTH);
    ctx.stroke_rect(-hw, -hh, width, height);

    let max_w = (width - CARD_PADDING * 2.0).max(1.0);
    ctx.set_fill_style_str(&card.theme.text);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    ctx.set_font(&format!("bold {NAME_FONT_PX}px sans-serif"));
    let name = fit_text_with_ellipsis(ctx, &card.name.to_uppercase(), max_w);
    ctx.fill_text(&name, -hw + CARD_PADDING, -hh + CARD_PADDING)?;

    ctx.set_font(&format!("{MESSAGE_FONT_PX}px sans-serif"));
    let line_height = MESSAGE_FONT_PX * 1.25;
    let top = -hh + CARD_PADDING + NAME_FONT_PX * 1.5;
    let room = (hh - CARD_PADDING - top).max(line_height);
    let mut lines = wrap_text_lines(ctx, &card.message, max_w);
    let max_lines = ((room / line_height).floor().max(1.0)) as usize;
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = fit_text_with_ellipsis(ctx, &format!("{last}..."), max_w);
        }
    }
    let mut y = top;
    for line in &lines {
        ctx.fill_text(line, -hw + CARD_PADDING, y)?;
        y += line_height;
    }
    Ok(())
}

// =============================================================
// Placeholder
// =============================================================

fn placeholder_text(kind: Placeholder) -> (&'static str, &'static str) {
    match kind {
        Placeholder::Loading => ("Loading...", "Fetching the latest posts."),
        Placeholder::Empty => ("It's quiet here...", "Be the first to post on the community board!"),
        Placeholder::Unavailable { permission_denied: true } => {
            ("Board locked", "This board is not accepting readers right now.")
        }
        Placeholder::Unavailable { permission_denied: false } => ("Board offline", "Posts could not be loaded."),
    }
}

fn draw_placeholder(ctx: &CanvasRenderingContext2d, sprite: &PlaceholderSprite) -> Result<(), JsValue> {
    with_saved(ctx, |ctx| draw_placeholder_body(ctx, sprite))
}

fn draw_placeholder_body(ctx: &CanvasRenderingContext2d, sprite: &PlaceholderSprite) -> Result<(), JsValue> {
    translate_and_rotate(ctx, sprite.x, sprite.y, sprite.width, sprite.height, sprite.rotation_deg)?;

    let hw = sprite.width / 2.0;
    let hh = sprite.height / 2.0;

    ctx.set_fill_style_str(PLACEHOLDER_SHADOW);
    ctx.fill_rect(-hw + SHADOW_OFFSET, -hh + SHADOW_OFFSET, sprite.width, sprite.height);
    ctx.set_fill_style_str(PAPER);
    ctx.fill_rect(-hw, -hh, sprite.width, sprite.height);
    ctx.set_stroke_style_str(INK);
    ctx.set_line_width(BORDER_WIDTH);
    ctx.stroke_rect(-hw, -hh, sprite.width, sprite.height);

    let (title, body) = placeholder_text(sprite.kind);
    let max_w = (sprite.width - CARD_PADDING * 2.0).max(1.0);
    ctx.set_fill_style_str(INK);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font(&format!("bold {NAME_FONT_PX}px sans-serif"));
    ctx.fill_text(&fit_text_with_ellipsis(ctx, title, max_w), 0.0, -hh / 2.0)?;

    ctx.set_font(&format!("{MESSAGE_FONT_PX}px sans-serif"));
    let line_height = MESSAGE_FONT_PX * 1.25;
    let mut y = 0.0;
    for line in wrap_text_lines(ctx, body, max_w) {
        ctx.fill_text(&line, 0.0, y)?;
        y += line_height;
    }
    Ok(())
}

// =============================================================
// Text layout
// =============================================================

fn wrap_text_lines(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() { word.to_owned() } else { format!("{current} {word}") };
        if current.is_empty() || measured_text_width(ctx, &candidate) <= max_w {
            current = candidate;
        } else {
            out.push(std::mem::take(&mut current));
            current = word.to_owned();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn fit_text_with_ellipsis(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if measured_text_width(ctx, trimmed) <= max_w {
        return trimmed.to_owned();
    }

    let ellipsis = "...";
    let mut chars: Vec<char> = trimmed.trim_end_matches(ellipsis).chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}{}", chars.iter().collect::<String>().trim_end(), ellipsis);
        if measured_text_width(ctx, &candidate) <= max_w {
            return candidate;
        }
    }
    ellipsis.to_owned()
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => f64::INFINITY,
    }
}

// =============================================================
// Helpers
// =============================================================

/// A drawing surface with a save/restore state stack.
trait StateStack {
    fn save(&self);
    fn restore(&self);
}

impl StateStack for CanvasRenderingContext2d {
    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }
}

/// Run `body` between `save()` and `restore()`. The state is restored on the
/// error path too, so a failed draw never leaks its transform into the next.
fn with_saved<S, T, E>(ctx: &S, body: impl FnOnce(&S) -> Result<T, E>) -> Result<T, E>
where
    S: StateStack + ?Sized,
{
    ctx.save();
    let result = body(ctx);
    ctx.restore();
    result
}

/// Translate to the box's center and rotate by `rotation_deg`.
fn translate_and_rotate(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation_deg: f64,
) -> Result<(), JsValue> {
    ctx.translate(x + width / 2.0, y + height / 2.0)?;
    ctx.rotate(rotation_deg.to_radians())?;
    Ok(())
}
