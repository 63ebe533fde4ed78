//! Shared numeric constants for the pinboard crate.

// ── Grid ────────────────────────────────────────────────────────

/// Card width in world units.
pub const CARD_WIDTH: f64 = 220.0;

/// Card height in world units.
pub const CARD_HEIGHT: f64 = 160.0;

/// Space between neighbouring grid cells.
pub const GRID_GAP: f64 = 40.0;

/// Offset of the first grid cell from the world origin, on both axes.
pub const GRID_MARGIN: f64 = 100.0;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 6;

/// Jitter is `(code mod JITTER_MODULUS) - JITTER_SPAN`, giving `[-10, 9]`.
pub const JITTER_MODULUS: u32 = 20;
pub const JITTER_SPAN: f64 = 10.0;

/// Rotation is `(sum mod ROTATION_MODULUS) - ROTATION_SPAN` degrees.
pub const ROTATION_MODULUS: u32 = 10;
pub const ROTATION_SPAN: f64 = 5.0;

// ── Camera ──────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.2;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Scale change per unit of pinch-distance change.
pub const PINCH_SENSITIVITY: f64 = 0.005;

/// Scale change per unit of modifier-wheel delta.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Scale change per zoom-button press.
pub const ZOOM_BUTTON_STEP: f64 = 0.2;

/// Initial pan on both axes.
pub const INITIAL_PAN: f64 = -100.0;

// ── Placeholder ─────────────────────────────────────────────────

/// World-space top-left of the empty-board placeholder.
pub const PLACEHOLDER_X: f64 = 160.0;
pub const PLACEHOLDER_Y: f64 = 160.0;

/// Placeholder box size in world units.
pub const PLACEHOLDER_WIDTH: f64 = 256.0;
pub const PLACEHOLDER_HEIGHT: f64 = 120.0;

/// Placeholder tilt in degrees.
pub const PLACEHOLDER_ROTATION_DEG: f64 = -3.0;

// ── Composer ────────────────────────────────────────────────────

/// Maximum UTF-16 units in a post author name.
pub const NAME_MAX_CHARS: usize = 20;

/// Maximum UTF-16 units in a post headline.
pub const MESSAGE_MAX_CHARS: usize = 50;

/// Number of most recent posts summarised by a vibe check.
pub const VIBE_WINDOW: usize = 10;
