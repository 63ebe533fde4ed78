use super::*;

fn draft(name: &str, message: &str) -> PostDraft {
    let mut d = PostDraft::new();
    d.set_name(name);
    d.set_message(message);
    d
}

fn posts(n: usize) -> Vec<Post> {
    (0..n).map(|i| Post::new(format!("id{i}"), format!("n{i}"), format!("m{i}"))).collect()
}

// =============================================================
// Magic draft
// =============================================================

#[test]
fn magic_draft_needs_name_or_message() {
    assert_eq!(magic_draft_prompt(&PostDraft::new()), None);
}

#[test]
fn magic_draft_uses_both_fields() {
    let prompt = magic_draft_prompt(&draft("Ada", "Ships code")).unwrap();
    assert!(prompt.contains("name is \"Ada\""));
    assert!(prompt.contains("headline message is \"Ships code\""));
    assert!(prompt.contains("Do not use hashtags."));
}

#[test]
fn magic_draft_defaults_missing_name() {
    let prompt = magic_draft_prompt(&draft("", "Hi")).unwrap();
    assert!(prompt.contains("\"Anonymous\""));
}

#[test]
fn magic_draft_defaults_missing_message() {
    let prompt = magic_draft_prompt(&draft("Ada", "")).unwrap();
    assert!(prompt.contains("\"Hello world\""));
}

// =============================================================
// Vibe check
// =============================================================

#[test]
fn recent_messages_formats_and_joins() {
    assert_eq!(recent_messages(&posts(2)), "n0 says: m0. n1 says: m1");
}

#[test]
fn recent_messages_keeps_last_ten() {
    let text = recent_messages(&posts(12));
    assert!(text.starts_with("n2 says: m2"));
    assert!(text.ends_with("n11 says: m11"));
    assert!(!text.contains("n1 says"));
    assert_eq!(text.matches(" says: ").count(), 10);
}

#[test]
fn vibe_check_on_empty_board_uses_fallback() {
    let prompt = vibe_check_prompt(&[]);
    assert!(prompt.ends_with("Messages: The board is empty and waiting for art."));
}

#[test]
fn vibe_check_embeds_messages() {
    let prompt = vibe_check_prompt(&posts(1));
    assert!(prompt.ends_with("Messages: n0 says: m0"));
    assert!(prompt.contains("Act like an art critic."));
}

// =============================================================
// Reply resolution
// =============================================================

#[test]
fn resolve_passes_text_through() {
    let out = resolve_generation::<String>(Ok(Some("Bold.".into())));
    assert_eq!(out, "Bold.");
}

#[test]
fn resolve_missing_text_is_creative_block() {
    assert_eq!(resolve_generation::<String>(Ok(None)), EMPTY_REPLY_FALLBACK);
    assert_eq!(resolve_generation::<String>(Ok(Some("  ".into()))), EMPTY_REPLY_FALLBACK);
}

#[test]
fn resolve_error_is_silent_muse() {
    assert_eq!(resolve_generation(Err("timeout")), FAILED_REPLY_FALLBACK);
}
