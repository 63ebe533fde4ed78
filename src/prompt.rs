//! Prompts for the external text-generation service, and how its replies are
//! turned into display text.
//!
//! The HTTP call itself belongs to the host. This module only builds the
//! request text and maps whatever comes back to something showable.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use std::fmt::Display;

use crate::consts::VIBE_WINDOW;
use crate::post::{Post, PostDraft};

/// Shown when the service answered without any text.
pub const EMPTY_REPLY_FALLBACK: &str = "Creative block! Try again.";
/// Shown when the request failed outright.
pub const FAILED_REPLY_FALLBACK: &str = "The muse is silent right now. Try again later!";

const ANONYMOUS_NAME: &str = "Anonymous";
const DEFAULT_HEADLINE: &str = "Hello world";
const EMPTY_BOARD_MESSAGES: &str = "The board is empty and waiting for art.";

/// Prompt asking for a short bio from the draft's name and headline.
///
/// Returns `None` when the draft has neither, matching the disabled
/// magic-draft button.
#[must_use]
pub fn magic_draft_prompt(draft: &PostDraft) -> Option<String> {
    if !draft.can_magic_draft() {
        return None;
    }
    let name = non_empty_or(draft.name(), ANONYMOUS_NAME);
    let headline = non_empty_or(draft.message(), DEFAULT_HEADLINE);
    Some(format!(
        "Write a fun, punchy, pop-art inspired short bio (max 3 sentences) for a community board.\n\
         The person's name is \"{name}\" and their headline message is \"{headline}\".\n\
         Make it sound cool, artistic, and energetic. Do not use hashtags."
    ))
}

/// Prompt asking for a one-line read on the board's mood from its most
/// recent posts.
#[must_use]
pub fn vibe_check_prompt(posts: &[Post]) -> String {
    let recent = recent_messages(posts);
    let messages = non_empty_or(&recent, EMPTY_BOARD_MESSAGES);
    format!(
        "Analyze these community messages and describe the current 'vibe' of the board in 1 short, \
         witty, pop-art inspired sentence.\n\
         Act like an art critic.\n\
         Messages: {messages}"
    )
}

/// The last [`VIBE_WINDOW`] posts as `"{name} says: {message}"`, joined by `". "`.
#[must_use]
pub fn recent_messages(posts: &[Post]) -> String {
    let start = posts.len().saturating_sub(VIBE_WINDOW);
    posts[start..]
        .iter()
        .map(|p| format!("{} says: {}", p.name, p.message))
        .collect::<Vec<_>>()
        .join(". ")
}

/// Turn the service outcome into display text. Never fails.
///
/// Blank replies and errors fall back to fixed messages; errors are logged.
pub fn resolve_generation<E: Display>(outcome: Result<Option<String>, E>) -> String {
    match outcome {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_REPLY_FALLBACK.to_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "text generation failed");
            FAILED_REPLY_FALLBACK.to_owned()
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
