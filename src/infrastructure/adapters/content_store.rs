//! Static article store and device-local like state
//!
//! The blog content is statically known at build time; likes live only on
//! the viewing device and reset with it. Neither touches the payment core.

use crate::domain::content::{ArticleStore, LikeState, Post};
use std::collections::HashMap;
use std::sync::RwLock;

/// Article store seeded with the site's posts
pub struct StaticArticleStore {
    posts: Vec<Post>,
}

impl StaticArticleStore {
    pub fn new() -> Self {
        Self { posts: seed_posts() }
    }
}

impl Default for StaticArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore for StaticArticleStore {
    fn list_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.iter().find(|p| p.slug == slug).cloned()
    }
}

/// Device-local like storage: slug -> like state, never synced anywhere
pub struct DeviceLikeStore {
    states: RwLock<HashMap<String, LikeState>>,
}

impl DeviceLikeStore {
    pub fn new() -> Self {
        Self { states: RwLock::new(HashMap::new()) }
    }

    /// Current state for a post, seeding the display count on first view
    pub fn get(&self, slug: &str) -> LikeState {
        if let Some(state) = self.states.read().unwrap().get(slug) {
            return *state;
        }
        let mut states = self.states.write().unwrap();
        *states.entry(slug.to_string()).or_insert_with(LikeState::seeded)
    }

    /// Toggle the like for a post and return the new state
    pub fn toggle(&self, slug: &str) -> LikeState {
        let current = self.get(slug);
        let next = current.toggle();
        self.states.write().unwrap().insert(slug.to_string(), next);
        next
    }
}

impl Default for DeviceLikeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            title: "The Polysemy of Love".to_string(),
            slug: "the-polysemy-of-love".to_string(),
            date: "15th Jan 2026".to_string(),
            excerpt: "Deconstructing the \"monstrous parasite\" that ruins small pleasures."
                .to_string(),
            tags: vec![
                "love".to_string(),
                "philosophy".to_string(),
                "Lacan".to_string(),
                "deconstruction".to_string(),
            ],
            content: vec![
                "Love, in its many forms, has been called the most noble of human pursuits. But what if it is also the most parasitic?".to_string(),
                "When we examine love through the lens of Lacanian psychoanalysis, we begin to see how our desire for the Other often masks a deeper desire for recognition, for validation, for a mirror that reflects back the self we wish we were.".to_string(),
                "Perhaps the first step in reclaiming love is to strip it of its romantic mythology and see it for what it is: a complex negotiation between two subjects, each with their own lack, their own desire, their own fundamental misrecognition.".to_string(),
            ],
            comments: vec![],
        },
        Post {
            title: "Beyond the Masks".to_string(),
            slug: "beyond-the-masks".to_string(),
            date: "28th Dec 2025".to_string(),
            excerpt: "The escape of masculinity and the sophisticated game of the feminine disguise.".to_string(),
            tags: vec![
                "masculinity".to_string(),
                "femininity".to_string(),
                "identity".to_string(),
                "performance".to_string(),
            ],
            content: vec![
                "We are all wearing masks. The question is not whether to remove them, but which ones to acknowledge.".to_string(),
                "The path beyond the masks is not authenticity but rather a conscious relationship with our own performances. To know that you are performing, and to perform anyway, with intention and awareness.".to_string(),
            ],
            comments: vec![],
        },
        Post {
            title: "The Lion's Bargain".to_string(),
            slug: "the-lions-bargain".to_string(),
            date: "12th Dec 2025".to_string(),
            excerpt: "Why expecting life to be fair is the ultimate tactical error.".to_string(),
            tags: vec![
                "fairness".to_string(),
                "philosophy".to_string(),
                "Nietzsche".to_string(),
                "reality".to_string(),
            ],
            content: vec![
                "The lion does not negotiate with the gazelle about the fairness of the hunt. This is not cruelty; it is simply the nature of existence.".to_string(),
                "The lion's bargain is simple: engage with reality as it is, not as you wish it to be. From this position of clarity, true action becomes possible.".to_string(),
            ],
            comments: vec![],
        },
        Post {
            title: "The Invisible Courtroom".to_string(),
            slug: "the-invisible-courtroom".to_string(),
            date: "1st Dec 2025".to_string(),
            excerpt: "Navigating the social gaze and the architecture of female liberation.".to_string(),
            tags: vec![
                "social gaze".to_string(),
                "liberation".to_string(),
                "feminism".to_string(),
                "Sartre".to_string(),
            ],
            content: vec![
                "We live our lives in an invisible courtroom, constantly on trial before judges we cannot see.".to_string(),
                "True liberation lies in the ability to navigate the social gaze consciously, to choose which courts to recognize and which verdicts to accept.".to_string(),
            ],
            comments: vec![],
        },
    ]
}
