use serde_json::json;

use super::*;

// =============================================================
// Post wire shape
// =============================================================

#[test]
fn post_deserializes_camel_case_fields() {
    let value = json!({
        "id": "abc123",
        "name": "Ada",
        "message": "Hello board",
        "details": "Long story",
        "createdAt": { "seconds": 1_700_000_000, "nanoseconds": 0 },
        "authorId": "uid-1",
        "photoURL": "https://example.test/a.png",
    });
    let post: Post = serde_json::from_value(value).unwrap();
    assert_eq!(post.id, "abc123");
    assert_eq!(post.name, "Ada");
    assert_eq!(post.message, "Hello board");
    assert_eq!(post.details.as_deref(), Some("Long story"));
    assert_eq!(post.author_id.as_deref(), Some("uid-1"));
    assert_eq!(post.photo_url.as_deref(), Some("https://example.test/a.png"));
    assert_eq!(post.created_at.unwrap()["seconds"], 1_700_000_000);
}

#[test]
fn post_missing_optional_fields_default() {
    let post: Post = serde_json::from_value(json!({ "id": "x1" })).unwrap();
    assert_eq!(post.name, "");
    assert_eq!(post.message, "");
    assert!(post.details.is_none());
    assert!(post.created_at.is_none());
    assert!(post.author_id.is_none());
    assert!(post.photo_url.is_none());
}

#[test]
fn post_without_id_is_rejected() {
    let res: Result<Post, _> = serde_json::from_value(json!({ "name": "nobody" }));
    assert!(res.is_err());
}

#[test]
fn post_serialize_skips_absent_options() {
    let value = serde_json::to_value(Post::new("p1", "Ada", "hi")).unwrap();
    assert_eq!(value, json!({ "id": "p1", "name": "Ada", "message": "hi" }));
}

#[test]
fn parse_snapshot_keeps_order() {
    let posts = Post::parse_snapshot(r#"[{"id":"b"},{"id":"a"},{"id":"c"}]"#).unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn parse_snapshot_empty_array() {
    assert!(Post::parse_snapshot("[]").unwrap().is_empty());
}

#[test]
fn parse_snapshot_rejects_object() {
    assert!(Post::parse_snapshot(r#"{"id":"a"}"#).is_err());
}

// =============================================================
// PostDraft
// =============================================================

#[test]
fn draft_default_is_empty() {
    let draft = PostDraft::new();
    assert_eq!(draft.name(), "");
    assert_eq!(draft.message(), "");
    assert_eq!(draft.details(), "");
    assert!(!draft.can_magic_draft());
}

#[test]
fn draft_truncates_name_to_twenty_chars() {
    let mut draft = PostDraft::new();
    draft.set_name("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(draft.name(), "abcdefghijklmnopqrst");
}

#[test]
fn draft_truncates_message_to_fifty_chars() {
    let mut draft = PostDraft::new();
    draft.set_message(&"m".repeat(80));
    assert_eq!(draft.message().chars().count(), 50);
}

#[test]
fn draft_truncation_counts_chars_not_bytes() {
    let mut draft = PostDraft::new();
    draft.set_name(&"é".repeat(25));
    assert_eq!(draft.name().chars().count(), 20);
}

#[test]
fn draft_truncation_counts_utf16_units() {
    let mut draft = PostDraft::new();
    // Each emoji is a surrogate pair: ten fill the name exactly.
    draft.set_name(&"\u{1F600}".repeat(11));
    assert_eq!(draft.name(), "\u{1F600}".repeat(10));
    assert_eq!(draft.name().encode_utf16().count(), 20);
}

#[test]
fn draft_truncation_never_splits_surrogate_pair() {
    let mut draft = PostDraft::new();
    draft.set_message(&format!("{}\u{1F600}", "a".repeat(49)));
    assert_eq!(draft.message(), "a".repeat(49));
}

#[test]
fn draft_details_are_unbounded() {
    let mut draft = PostDraft::new();
    draft.set_details("d".repeat(500));
    assert_eq!(draft.details().len(), 500);
}

#[test]
fn magic_draft_needs_name_or_message() {
    let mut draft = PostDraft::new();
    draft.set_name("Ada");
    assert!(draft.can_magic_draft());

    let mut draft = PostDraft::new();
    draft.set_message("hello");
    assert!(draft.can_magic_draft());

    let mut draft = PostDraft::new();
    draft.set_details("only details");
    assert!(!draft.can_magic_draft());
}

#[test]
fn draft_reset_clears_fields() {
    let mut draft = PostDraft::new();
    draft.set_name("Ada");
    draft.set_message("hi");
    draft.set_details("more");
    draft.reset();
    assert_eq!(draft, PostDraft::default());
}
