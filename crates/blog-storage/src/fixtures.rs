//! JSON fixtures for seeding stores

use crate::{CommentStore, PostStore};
use blog_core::comment::{Comment, CommentValidator};
use blog_core::config::BlogConfig;
use blog_core::error::Result;
use blog_core::post::Post;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Posts and comments to preload into fresh stores
///
/// ```json
/// { "posts": [{ "id": 1, "title": "Hello" }],
///   "comments": [{ "id": 1, "postId": 1, "author": "ada",
///                  "comment": "Hi", "creationDate": "2024-01-01T00:00:00Z" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Fixtures {
    /// Parse fixtures from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load fixtures from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let fixtures = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded {} posts and {} comments from {:?}",
            fixtures.posts.len(),
            fixtures.comments.len(),
            path
        );
        Ok(fixtures)
    }

    /// Load the fixture file named in the config, or nothing if none is set
    pub fn from_config(config: &BlogConfig) -> Result<Self> {
        match &config.fixtures.path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Seed a post store and a comment store. Seeding skips validation.
    pub fn into_stores(self) -> (PostStore, CommentStore) {
        (
            PostStore::with_seed(self.posts),
            CommentStore::with_seed(self.comments),
        )
    }

    /// Like [`Fixtures::into_stores`], with later comment inserts checked by
    /// `validator`
    pub fn into_stores_with(self, validator: CommentValidator) -> (PostStore, CommentStore) {
        let (posts, mut comments) = self.into_stores();
        comments.set_validator(validator);
        (posts, comments)
    }
}
