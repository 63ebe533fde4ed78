use super::*;

fn posts(ids: &[&str]) -> Vec<Post> {
    ids.iter().map(|id| Post::new(*id, format!("name-{id}"), "msg")).collect()
}

fn feed() -> PostFeed {
    PostFeed::new(GridSpec::default(), 6)
}

// =============================================================
// Status
// =============================================================

#[test]
fn new_feed_is_loading_and_empty() {
    let f = feed();
    assert_eq!(f.status(), &FeedStatus::Loading);
    assert!(f.is_empty());
    assert_eq!(f.placeholder(), Some(Placeholder::Loading));
}

#[test]
fn empty_snapshot_is_live_and_empty() {
    let mut f = feed();
    f.replace(Vec::new());
    assert_eq!(f.status(), &FeedStatus::Live);
    assert_eq!(f.placeholder(), Some(Placeholder::Empty));
}

#[test]
fn nonempty_snapshot_has_no_placeholder() {
    let mut f = feed();
    f.replace(posts(&["ab"]));
    assert_eq!(f.placeholder(), None);
    assert_eq!(f.len(), 1);
}

#[test]
fn failure_before_any_snapshot_is_unavailable() {
    let mut f = feed();
    f.fail(FeedError::from_code("permission-denied", "rules"));
    assert_eq!(f.placeholder(), Some(Placeholder::Unavailable { permission_denied: true }));
}

#[test]
fn failure_keeps_last_posts() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd"]));
    f.fail(FeedError::from_code("unavailable", "offline"));
    assert_eq!(f.len(), 2);
    assert!(matches!(f.status(), FeedStatus::Unavailable(FeedError::Unavailable(_))));
    assert_eq!(f.placeholder(), None);
}

#[test]
fn snapshot_after_failure_clears_error() {
    let mut f = feed();
    f.fail(FeedError::from_code("permission-denied", "rules"));
    f.replace(Vec::new());
    assert_eq!(f.status(), &FeedStatus::Live);
    assert_eq!(f.placeholder(), Some(Placeholder::Empty));
}

// =============================================================
// FeedError
// =============================================================

#[test]
fn from_code_maps_permission_denied() {
    let err = FeedError::from_code(PERMISSION_DENIED_CODE, "nope");
    assert!(err.is_permission_denied());
    assert_eq!(err.to_string(), "permission denied: nope");
}

#[test]
fn from_code_maps_everything_else_to_unavailable() {
    for code in ["unavailable", "internal", ""] {
        let err = FeedError::from_code(code, "x");
        assert!(!err.is_permission_denied());
    }
}

// =============================================================
// Placements
// =============================================================

#[test]
fn placements_follow_sequence_index() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd", "ef"]));
    for (index, (post, placement)) in f.iter().enumerate() {
        assert_eq!(*placement, place_card(&post.id, index, &GridSpec::default(), 6));
    }
}

#[test]
fn first_snapshot_derives_every_placement() {
    let mut f = feed();
    assert_eq!(f.replace(posts(&["ab", "cd", "ef"])), 3);
}

#[test]
fn unchanged_snapshot_reuses_every_placement() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd", "ef"]));
    assert_eq!(f.replace(posts(&["ab", "cd", "ef"])), 0);
}

#[test]
fn appended_post_derives_only_new_placement() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd"]));
    assert_eq!(f.replace(posts(&["ab", "cd", "ef"])), 1);
}

#[test]
fn removal_reindexes_later_posts() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd", "ef"]));
    let rederived = f.replace(posts(&["cd", "ef"]));
    assert_eq!(rederived, 2);

    let (post, placement) = f.get(0).unwrap();
    assert_eq!(post.id, "cd");
    assert_eq!(placement.color_index, 0);
    assert_eq!(*placement, place_card("cd", 0, &GridSpec::default(), 6));
}

#[test]
fn get_out_of_range_is_none() {
    let mut f = feed();
    f.replace(posts(&["ab"]));
    assert!(f.get(1).is_none());
}

#[test]
fn set_layout_rederives_with_new_grid() {
    let mut f = feed();
    f.replace(posts(&["ab", "cd"]));
    let grid = GridSpec { columns: 1, ..GridSpec::default() };
    f.set_layout(grid, 2);
    assert_eq!(f.grid().columns, 1);
    assert_eq!(f.placements()[1], place_card("cd", 1, &grid, 2));
}

#[test]
fn default_feed_uses_stock_layout() {
    let mut f = PostFeed::default();
    f.replace(posts(&["ab"]));
    assert_eq!(f.placements()[0], place_card("ab", 0, &GridSpec::default(), 6));
    assert_eq!(f.posts()[0].name, "name-ab");
}
