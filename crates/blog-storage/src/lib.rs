//! blog-storage - Storage library for blog-repo
//!
//! In-memory stores for posts and comments. The bare stores are
//! single-threaded: mutation goes through `&mut self`. Services handling
//! concurrent requests wrap each store in [`Shared`], which guards it with a
//! read-write lock.

mod comment_store;
mod fixtures;
mod post_store;
mod repository;
mod shared;

pub use comment_store::CommentStore;
pub use fixtures::Fixtures;
pub use post_store::PostStore;
pub use repository::{CommentRepository, PostRepository};
pub use shared::Shared;
