#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_PAN, MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
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

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Inclusive zoom bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: MIN_ZOOM, max: MAX_ZOOM }
    }
}

impl ZoomLimits {
    /// Clamp `scale` into the bounds. Applying it twice is a no-op.
    ///
    /// Never panics: inverted bounds resolve to `max`, and a NaN bound is
    /// ignored.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Camera state for pan/zoom on the infinite pinboard.
///
/// `pan_x` / `pan_y` are in CSS pixels and unbounded.
/// `scale` is a zoom factor (1.0 = no zoom) kept inside [`ZoomLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: INITIAL_PAN, pan_y: INITIAL_PAN, scale: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.scale,
            y: (screen.y - self.pan_y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.pan_x,
            y: world.y * self.scale + self.pan_y,
        }
    }

    /// Translate the content layer by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Add `delta` to the scale and clamp into `limits`.
    pub fn zoom_by(&mut self, delta: f64, limits: ZoomLimits) {
        self.scale = limits.clamp(self.scale + delta);
    }

    /// Scale as a whole percentage, for the HUD.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }
}
