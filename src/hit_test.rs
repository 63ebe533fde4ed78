use super::*;
use crate::post::Post;

fn identity() -> Camera {
    Camera { pan_x: 0.0, pan_y: 0.0, scale: 1.0 }
}

fn feed_with(ids: &[&str], grid: GridSpec) -> PostFeed {
    let mut feed = PostFeed::new(grid, 6);
    feed.replace(ids.iter().map(|id| Post::new(*id, "n", "m")).collect());
    feed
}

fn unrotated(x: f64, y: f64) -> CardPlacement {
    CardPlacement { x, y, rotation_deg: 0.0, color_index: 0 }
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_empty_feed_is_none() {
    let feed = PostFeed::default();
    assert!(hit_test(Point::new(200.0, 200.0), &identity(), &feed).is_none());
}

#[test]
fn hit_card_center() {
    // "ab" at index 0 -> (107, 108), rotation 0, center (217, 188)
    let feed = feed_with(&["ab"], GridSpec::default());
    let hit = hit_test(Point::new(217.0, 188.0), &identity(), &feed).unwrap();
    assert_eq!(hit.index, 0);
    assert_eq!(hit.local, Point::new(0.0, 0.0));
}

#[test]
fn hit_background_is_none() {
    let feed = feed_with(&["ab"], GridSpec::default());
    assert!(hit_test(Point::new(10.0, 10.0), &identity(), &feed).is_none());
}

#[test]
fn hit_respects_camera_pan() {
    // Default camera pans by -100, so the center shows at (117, 88).
    let feed = feed_with(&["ab"], GridSpec::default());
    let hit = hit_test(Point::new(117.0, 88.0), &Camera::default(), &feed).unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn hit_respects_camera_scale() {
    let feed = feed_with(&["ab"], GridSpec::default());
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, scale: 2.0 };
    assert!(hit_test(Point::new(434.0, 376.0), &cam, &feed).is_some());
    assert!(hit_test(Point::new(217.0, 188.0), &cam, &feed).is_none());
}

#[test]
fn hit_second_card_in_row() {
    let feed = feed_with(&["ab", "ab"], GridSpec::default());
    // index 1 -> x = 260 + 107
    let hit = hit_test(Point::new(367.0 + 110.0, 188.0), &identity(), &feed).unwrap();
    assert_eq!(hit.index, 1);
}

#[test]
fn hit_overlap_prefers_later_card() {
    let grid = GridSpec { columns: 1, gap: -100.0, ..GridSpec::default() };
    let feed = feed_with(&["ab", "ba"], grid);
    let hit = hit_test(Point::new(200.0, 200.0), &identity(), &feed).unwrap();
    assert_eq!(hit.index, 1);
}

#[test]
fn hit_gap_between_cards_is_none() {
    let feed = feed_with(&["ab", "ab"], GridSpec::default());
    // Card 0 ends at x = 327, card 1 starts at x = 367.
    assert!(hit_test(Point::new(347.0, 188.0), &identity(), &feed).is_none());
}

// =============================================================
// card_local_point
// =============================================================

#[test]
fn local_point_edges_are_inside() {
    let grid = GridSpec::default();
    let p = unrotated(0.0, 0.0);
    assert!(card_local_point(Point::new(0.0, 0.0), &p, &grid).is_some());
    assert!(card_local_point(Point::new(220.0, 160.0), &p, &grid).is_some());
    assert!(card_local_point(Point::new(220.1, 80.0), &p, &grid).is_none());
}

#[test]
fn local_point_accounts_for_rotation() {
    let grid = GridSpec::default();
    let p = CardPlacement { x: 0.0, y: 0.0, rotation_deg: 90.0, color_index: 0 };
    let center = p.center(&grid);
    // Turned a quarter, the card is 160 wide and 220 tall on screen.
    assert!(card_local_point(Point::new(center.x, center.y + 100.0), &p, &grid).is_some());
    assert!(card_local_point(Point::new(center.x + 100.0, center.y), &p, &grid).is_none());
}

#[test]
fn local_point_small_tilt_clips_corner() {
    let grid = GridSpec::default();
    let p = CardPlacement { x: 0.0, y: 0.0, rotation_deg: 5.0, color_index: 0 };
    // The unrotated top-left corner falls outside once tilted.
    assert!(card_local_point(Point::new(0.5, 0.5), &p, &grid).is_none());
    assert!(card_local_point(Point::new(110.0, 80.0), &p, &grid).is_some());
}
