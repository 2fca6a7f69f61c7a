//! Content collaborator models
//!
//! The article list, likes, and sharing are simple site plumbing the checkout
//! core treats as black boxes. Nothing here is persisted beyond the device.

use serde::{Deserialize, Serialize};

/// A reader comment held only in ephemeral UI state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub user: String,
    pub date: String,
    pub text: String,
}

/// A statically-known blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub excerpt: String,
    pub content: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Read-only article store, statically known at build time
pub trait ArticleStore: Send + Sync {
    fn list_posts(&self) -> Vec<Post>;
    fn get_post_by_slug(&self, slug: &str) -> Option<Post>;
}

/// Device-local like state for one post: a toggle plus a display count
/// seeded randomly on first view, matching the site's fake counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u32,
}

impl LikeState {
    /// Seed a fresh state with a display count in 10..=59
    pub fn seeded() -> Self {
        use rand::Rng;
        let count = rand::rng().random_range(10..60);
        Self { liked: false, count }
    }

    /// Toggle the like and adjust the count accordingly
    pub fn toggle(self) -> Self {
        if self.liked {
            Self { liked: false, count: self.count.saturating_sub(1) }
        } else {
            Self { liked: true, count: self.count + 1 }
        }
    }
}

/// Outcome of a share attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the platform's native share sheet
    Shared,
    /// Native sharing unavailable; the link was copied to the clipboard
    CopiedLink,
}

/// Platform share capability with a clipboard fallback
pub trait SharePlatform: Send + Sync {
    /// Native share sheet; Err means unavailable on this device
    fn native_share(&self, title: &str, url: &str) -> Result<(), String>;
    /// Clipboard fallback
    fn copy_to_clipboard(&self, url: &str) -> Result<(), String>;
}

/// Share a post, preferring the native sheet and falling back to the clipboard
pub fn share_post(
    platform: &dyn SharePlatform,
    title: &str,
    url: &str,
) -> Result<ShareOutcome, String> {
    if platform.native_share(title, url).is_ok() {
        return Ok(ShareOutcome::Shared);
    }
    platform.copy_to_clipboard(url)?;
    Ok(ShareOutcome::CopiedLink)
}
