#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::feed::PostFeed;
use crate::layout::{CardPlacement, GridSpec};

/// Result of a hit test against the displayed cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardHit {
    /// Index of the card in the displayed sequence.
    pub index: usize,
    /// Hit position in the card's unrotated frame, origin at its center.
    pub local: Point,
}

/// Find the topmost card under `screen_pt`.
///
/// Later cards are drawn over earlier ones, so the sequence is scanned back to
/// front.
#[must_use]
pub fn hit_test(screen_pt: Point, camera: &Camera, feed: &PostFeed) -> Option<CardHit> {
    let world = camera.screen_to_world(screen_pt);
    let grid = feed.grid();
    feed.placements()
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, placement)| card_local_point(world, placement, grid).map(|local| CardHit { index, local }))
}

/// Map `world` into the card's unrotated frame, if it lies inside the card.
#[must_use]
pub fn card_local_point(world: Point, placement: &CardPlacement, grid: &GridSpec) -> Option<Point> {
    let center = placement.center(grid);
    let dx = world.x - center.x;
    let dy = world.y - center.y;
    let (sin, cos) = placement.rotation_deg.to_radians().sin_cos();
    let local = Point::new(dx * cos + dy * sin, -dx * sin + dy * cos);

    let inside = local.x.abs() <= grid.card_width / 2.0 && local.y.abs() <= grid.card_height / 2.0;
    inside.then_some(local)
}
