//! Repository traits the service layer depends on

use blog_core::comment::Comment;
use blog_core::error::Result;
use blog_core::post::Post;
use blog_core::types::{CommentId, PostId};

/// Trait for comment storage implementations
pub trait CommentRepository {
    /// Insert a comment. Fails on missing fields or a duplicate id,
    /// leaving the store untouched.
    fn insert(&mut self, comment: Comment) -> Result<()>;

    /// Get a copy of the comment with the given id
    fn get_by_id(&self, id: CommentId) -> Result<Comment>;

    /// Get every comment on a post, in insertion order
    fn get_all_by_post_id(&self, post_id: PostId) -> Vec<Comment>;
}

/// Trait for post storage implementations
pub trait PostRepository {
    /// Insert a post. Fails on a duplicate id, leaving the store untouched.
    fn insert(&mut self, post: Post) -> Result<()>;

    /// Get a copy of the post with the given id
    fn get_by_id(&self, id: PostId) -> Result<Post>;
}
