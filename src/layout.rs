//! Card layout: where each post lands on the pinboard.
//!
//! Placement is a pure function of a post's id and its index in the displayed
//! sequence. The grid cell comes from the index; the small positional jitter
//! and the tilt come from the UTF-16 code units of the id, so the same post
//! always lands in the same spot of its cell across re-renders and reconnects.
//! Color is taken from the palette by index alone, so removing an earlier post
//! can change the color of every later one.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    CARD_HEIGHT, CARD_WIDTH, GRID_COLUMNS, GRID_GAP, GRID_MARGIN, JITTER_MODULUS, JITTER_SPAN, ROTATION_MODULUS,
    ROTATION_SPAN,
};

/// Background and text color for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    /// Card fill as a CSS color string.
    pub background: String,
    /// Text color drawn on top of `background`.
    pub text: String,
}

impl ColorTheme {
    #[must_use]
    pub fn new(background: &str, text: &str) -> Self {
        Self { background: background.to_owned(), text: text.to_owned() }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new("#FFFFFF", "#000000")
    }
}

/// The theme for `color_index`, or the plain default when the palette is
/// shorter than expected.
#[must_use]
pub fn theme_for(palette: &[ColorTheme], color_index: usize) -> ColorTheme {
    palette.get(color_index).cloned().unwrap_or_default()
}

/// The six-color pop-art palette cards cycle through.
#[must_use]
pub fn default_palette() -> Vec<ColorTheme> {
    vec![
        ColorTheme::new("#FF0099", "#FFFFFF"), // hot pink
        ColorTheme::new("#FFFF00", "#000000"), // electric yellow
        ColorTheme::new("#00FFFF", "#000000"), // cyan
        ColorTheme::new("#FF3300", "#FFFFFF"), // bright red
        ColorTheme::new("#FFFFFF", "#000000"), // white
        ColorTheme::new("#00FF00", "#000000"), // lime
    ]
}

/// Grid geometry shared by every card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Cards per row. Zero is treated as one.
    pub columns: usize,
    pub card_width: f64,
    pub card_height: f64,
    /// Space between neighbouring cells.
    pub gap: f64,
    /// Offset of cell (0, 0) from the world origin.
    pub margin: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            gap: GRID_GAP,
            margin: GRID_MARGIN,
        }
    }
}

/// Where and how to draw one card. `x`/`y` is the unrotated top-left corner in
/// world space; the card is tilted by `rotation_deg` around its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPlacement {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub color_index: usize,
}

impl CardPlacement {
    /// World-space center of the card, which is also its rotation pivot.
    #[must_use]
    pub fn center(&self, grid: &GridSpec) -> Point {
        Point::new(self.x + grid.card_width / 2.0, self.y + grid.card_height / 2.0)
    }
}

/// Place the card at `index` in the displayed sequence.
///
/// Never fails: ids shorter than two code units get no jitter, a zero column
/// count behaves like a single column and an empty palette maps every card to
/// color 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn place_card(id: &str, index: usize, grid: &GridSpec, palette_size: usize) -> CardPlacement {
    let columns = grid.columns.max(1);
    let row = index / columns;
    let col = index % columns;

    let (offset_x, offset_y) = jitter(id);
    let base_x = col as f64 * (grid.card_width + grid.gap) + grid.margin;
    let base_y = row as f64 * (grid.card_height + grid.gap) + grid.margin;

    CardPlacement {
        x: base_x + offset_x,
        y: base_y + offset_y,
        rotation_deg: rotation_for(id),
        color_index: color_index(index, palette_size),
    }
}

/// Positional jitter from the first two code units of `id`.
#[must_use]
pub fn jitter(id: &str) -> (f64, f64) {
    let mut units = id.encode_utf16();
    match (units.next(), units.next()) {
        (Some(first), Some(second)) => (jitter_offset(first), jitter_offset(second)),
        _ => (0.0, 0.0),
    }
}

fn jitter_offset(code: u16) -> f64 {
    f64::from(u32::from(code) % JITTER_MODULUS) - JITTER_SPAN
}

/// Tilt in degrees from the sum of all code units of `id`.
#[must_use]
pub fn rotation_for(id: &str) -> f64 {
    let residue = id
        .encode_utf16()
        .fold(0u32, |acc, unit| (acc + u32::from(unit)) % ROTATION_MODULUS);
    f64::from(residue) - ROTATION_SPAN
}

/// Palette slot for the card at `index`.
#[must_use]
pub fn color_index(index: usize, palette_size: usize) -> usize {
    if palette_size == 0 { 0 } else { index % palette_size }
}
