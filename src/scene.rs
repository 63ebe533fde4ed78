//! Render model: everything the renderer needs for one frame, with no browser
//! types involved.
//!
//! A scene is the camera transform plus one sprite per displayed post, or a
//! placeholder when there are no posts. Building it never fails.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::Camera;
use crate::consts::{PLACEHOLDER_HEIGHT, PLACEHOLDER_ROTATION_DEG, PLACEHOLDER_WIDTH, PLACEHOLDER_X, PLACEHOLDER_Y};
use crate::feed::{Placeholder, PostFeed};
use crate::layout::{CardPlacement, ColorTheme, theme_for};

/// One card to draw, in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSprite {
    /// Post id, usable as a DOM key.
    pub post_id: String,
    pub index: usize,
    pub placement: CardPlacement,
    pub theme: ColorTheme,
    pub name: String,
    pub message: String,
}

/// The empty-board box, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderSprite {
    pub kind: Placeholder,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
}

impl PlaceholderSprite {
    #[must_use]
    pub fn new(kind: Placeholder) -> Self {
        Self {
            kind,
            x: PLACEHOLDER_X,
            y: PLACEHOLDER_Y,
            width: PLACEHOLDER_WIDTH,
            height: PLACEHOLDER_HEIGHT,
            rotation_deg: PLACEHOLDER_ROTATION_DEG,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Content-layer transform: `translate(pan) * scale(scale)`, origin top-left.
    pub camera: Camera,
    pub card_width: f64,
    pub card_height: f64,
    pub cards: Vec<CardSprite>,
    pub placeholder: Option<PlaceholderSprite>,
}

impl Scene {
    /// The content-layer transform as a CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.camera.pan_x, self.camera.pan_y, self.camera.scale
        )
    }

    /// CSS `transform` for one card: its corner offset, then its tilt.
    #[must_use]
    pub fn card_css_transform(card: &CardSprite) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            card.placement.x, card.placement.y, card.placement.rotation_deg
        )
    }
}

/// Build the frame for the current feed and camera.
#[must_use]
pub fn build(feed: &PostFeed, camera: &Camera, palette: &[ColorTheme]) -> Scene {
    let cards = feed
        .iter()
        .enumerate()
        .map(|(index, (post, placement))| CardSprite {
            post_id: post.id.clone(),
            index,
            placement: *placement,
            theme: theme_for(palette, placement.color_index),
            name: post.name.clone(),
            message: post.message.clone(),
        })
        .collect();

    let grid = feed.grid();
    Scene {
        camera: *camera,
        card_width: grid.card_width,
        card_height: grid.card_height,
        cards,
        placeholder: feed.placeholder().map(PlaceholderSprite::new),
    }
}
