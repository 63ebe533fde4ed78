//! The displayed post sequence and the state of the subscription behind it.
//!
//! Every subscription update is a full replacement: the new sequence is taken
//! as-is (already ordered by creation time) and each card's placement is keyed
//! by its new index. A placement is only re-derived when the id at that index
//! changed, since placement is a pure function of `(id, index)`.
//!
//! The feed also remembers whether the subscription has delivered yet and
//! whether it last failed, so an empty board can be told apart from a board
//! that could not be loaded.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::layout::{CardPlacement, GridSpec, place_card};
use crate::post::Post;

/// Collaborator error code for a rules rejection.
pub const PERMISSION_DENIED_CODE: &str = "permission-denied";

/// Failure reported by the post subscription.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The database rules rejected the read.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other subscription failure.
    #[error("post feed unavailable: {0}")]
    Unavailable(String),
}

impl FeedError {
    /// Classify a collaborator error by its code.
    #[must_use]
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        if code == PERMISSION_DENIED_CODE {
            Self::PermissionDenied(message.into())
        } else {
            Self::Unavailable(message.into())
        }
    }

    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

/// Where the subscription stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// No snapshot has arrived yet.
    #[default]
    Loading,
    /// The last update was a snapshot.
    Live,
    /// The last update was an error. Posts from the last snapshot are kept.
    Unavailable(FeedError),
}

/// What to draw instead of cards when the sequence is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
    Unavailable { permission_denied: bool },
}

/// Ordered posts with their cached placements.
#[derive(Debug, Clone)]
pub struct PostFeed {
    posts: Vec<Post>,
    placements: Vec<CardPlacement>,
    status: FeedStatus,
    grid: GridSpec,
    palette_size: usize,
}

impl PostFeed {
    #[must_use]
    pub fn new(grid: GridSpec, palette_size: usize) -> Self {
        Self { posts: Vec::new(), placements: Vec::new(), status: FeedStatus::Loading, grid, palette_size }
    }

    /// Replace the displayed sequence with a new snapshot.
    ///
    /// Returns how many placements had to be re-derived. Clears any previous
    /// subscription error.
    pub fn replace(&mut self, posts: Vec<Post>) -> usize {
        let mut placements = Vec::with_capacity(posts.len());
        let mut rederived = 0;
        for (index, post) in posts.iter().enumerate() {
            let cached = self
                .posts
                .get(index)
                .filter(|prev| prev.id == post.id)
                .and_then(|_| self.placements.get(index).copied());
            let placement = cached.unwrap_or_else(|| {
                rederived += 1;
                place_card(&post.id, index, &self.grid, self.palette_size)
            });
            placements.push(placement);
        }

        self.posts = posts;
        self.placements = placements;
        self.status = FeedStatus::Live;
        tracing::info!(count = self.posts.len(), rederived, "post feed replaced");
        rederived
    }

    /// Record a subscription failure. The last good posts stay displayed.
    pub fn fail(&mut self, error: FeedError) {
        tracing::warn!(error = %error, kept = self.posts.len(), "post feed unavailable");
        self.status = FeedStatus::Unavailable(error);
    }

    /// Change grid geometry or palette size and re-derive every placement.
    pub fn set_layout(&mut self, grid: GridSpec, palette_size: usize) {
        self.grid = grid;
        self.palette_size = palette_size;
        self.placements = self
            .posts
            .iter()
            .enumerate()
            .map(|(index, post)| place_card(&post.id, index, &self.grid, self.palette_size))
            .collect();
    }

    #[must_use]
    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn placements(&self) -> &[CardPlacement] {
        &self.placements
    }

    /// The post at `index` with its placement.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&Post, &CardPlacement)> {
        Some((self.posts.get(index)?, self.placements.get(index)?))
    }

    /// Posts with their placements, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Post, &CardPlacement)> {
        self.posts.iter().zip(self.placements.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The placeholder to show, or `None` when there are cards to draw.
    #[must_use]
    pub fn placeholder(&self) -> Option<Placeholder> {
        if !self.posts.is_empty() {
            return None;
        }
        Some(match &self.status {
            FeedStatus::Loading => Placeholder::Loading,
            FeedStatus::Live => Placeholder::Empty,
            FeedStatus::Unavailable(err) => Placeholder::Unavailable { permission_denied: err.is_permission_denied() },
        })
    }
}

impl Default for PostFeed {
    fn default() -> Self {
        Self::new(GridSpec::default(), crate::layout::default_palette().len())
    }
}
