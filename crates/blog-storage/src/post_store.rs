//! In-memory post store

use crate::repository::PostRepository;
use blog_core::error::{BlogError, EntityKind, Result};
use blog_core::post::Post;
use blog_core::types::PostId;
use tracing::{debug, trace};

/// Posts kept in insertion order
///
/// Only the id is checked on insert; all other fields are stored verbatim.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `seed`, skipping duplicate checks.
    /// Lookups return the first matching record.
    pub fn with_seed(seed: Vec<Post>) -> Self {
        debug!(count = seed.len(), "Seeded post store");
        Self { posts: seed }
    }

    /// Check if a post with this id is stored
    pub fn contains(&self, id: PostId) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }

    /// Copy of every stored post, in insertion order
    pub fn all(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// Number of stored posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if no posts are stored
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for PostStore {
    fn insert(&mut self, post: Post) -> Result<()> {
        if self.contains(post.id) {
            return Err(BlogError::already_exists(EntityKind::Post, post.id));
        }

        debug!(id = %post.id, "Inserted post");
        self.posts.push(post);
        Ok(())
    }

    fn get_by_id(&self, id: PostId) -> Result<Post> {
        trace!(%id, "Looking up post");
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| BlogError::not_found(EntityKind::Post, id))
    }
}
