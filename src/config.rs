//! Board tunables: grid geometry, palette, zoom behaviour and the initial camera.
//!
//! Defaults reproduce the stock board. The host may override any subset with a
//! JSON object, and a few knobs can also come from the environment. Every
//! source goes through [`BoardConfig::validate`] before the engine sees it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ZoomLimits};
use crate::consts::{MAX_ZOOM, MIN_ZOOM, PINCH_SENSITIVITY, WHEEL_ZOOM_SENSITIVITY, ZOOM_BUTTON_STEP};
use crate::layout::{ColorTheme, GridSpec, default_palette};

pub const ENV_COLUMNS: &str = "PINBOARD_COLUMNS";
pub const ENV_MIN_ZOOM: &str = "PINBOARD_MIN_ZOOM";
pub const ENV_MAX_ZOOM: &str = "PINBOARD_MAX_ZOOM";

/// Errors produced while loading or validating a [`BoardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A value parsed but is out of range.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Zoom bounds and the gain of each zoom input path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    /// Scale change per unit of two-finger distance change.
    pub pinch_sensitivity: f64,
    /// Scale change per unit of ctrl/cmd wheel delta.
    pub wheel_sensitivity: f64,
    /// Scale change per zoom-button press.
    pub button_step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            pinch_sensitivity: PINCH_SENSITIVITY,
            wheel_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            button_step: ZOOM_BUTTON_STEP,
        }
    }
}

impl ZoomSettings {
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        ZoomLimits { min: self.min, max: self.max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub grid: GridSpec,
    pub palette: Vec<ColorTheme>,
    pub zoom: ZoomSettings,
    pub initial_camera: Camera,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            palette: default_palette(),
            zoom: ZoomSettings::default(),
            initial_camera: Camera::default(),
        }
    }
}

impl BoardConfig {
    /// Parse host-supplied overrides. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] when
    /// the merged result fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    ///
    /// Optional:
    /// - `PINBOARD_COLUMNS`: cards per row
    /// - `PINBOARD_MIN_ZOOM`: lower zoom bound
    /// - `PINBOARD_MAX_ZOOM`: upper zoom bound
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when a variable is set but unparseable,
    /// [`ConfigError::Invalid`] when the result fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(columns) = env_override::<usize>(ENV_COLUMNS)? {
            config.grid.columns = columns;
        }
        if let Some(min) = env_override::<f64>(ENV_MIN_ZOOM)? {
            config.zoom.min = min;
        }
        if let Some(max) = env_override::<f64>(ENV_MAX_ZOOM)? {
            config.zoom.max = max;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable by the layout and the camera.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(ConfigError::Invalid { field, reason }) = &result {
            tracing::warn!(field, %reason, "rejected board config");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.grid.columns == 0 {
            return Err(invalid("grid.columns", "must be at least 1"));
        }
        positive("grid.card_width", self.grid.card_width)?;
        positive("grid.card_height", self.grid.card_height)?;
        finite("grid.gap", self.grid.gap)?;
        if self.grid.gap < 0.0 {
            return Err(invalid("grid.gap", "must not be negative"));
        }
        finite("grid.margin", self.grid.margin)?;

        if self.palette.is_empty() {
            return Err(invalid("palette", "needs at least one color"));
        }

        positive("zoom.min", self.zoom.min)?;
        positive("zoom.max", self.zoom.max)?;
        if self.zoom.min > self.zoom.max {
            return Err(invalid("zoom.min", "must not exceed zoom.max"));
        }
        positive("zoom.pinch_sensitivity", self.zoom.pinch_sensitivity)?;
        positive("zoom.wheel_sensitivity", self.zoom.wheel_sensitivity)?;
        positive("zoom.button_step", self.zoom.button_step)?;

        finite("initial_camera.pan_x", self.initial_camera.pan_x)?;
        finite("initial_camera.pan_y", self.initial_camera.pan_y)?;
        let scale = self.initial_camera.scale;
        if !(self.zoom.min..=self.zoom.max).contains(&scale) {
            return Err(invalid("initial_camera.scale", format!("{scale} outside zoom limits")));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() { Ok(()) } else { Err(invalid(field, "must be finite")) }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 { Ok(()) } else { Err(invalid(field, "must be positive")) }
}

fn env_override<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::Parse(format!("{key}: cannot parse {raw:?}")))
}
