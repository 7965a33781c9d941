//! Lock-guarded store handle for concurrent callers

use crate::repository::{CommentRepository, PostRepository};
use blog_core::comment::Comment;
use blog_core::error::Result;
use blog_core::post::Post;
use blog_core::types::{CommentId, PostId};
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle to a store guarded by a read-write lock
///
/// Every clone points at the same store. Inserts hold the write lock for the
/// whole validate, scan and append step, so a value is visible to any
/// lookup that starts after the insert returns. A poisoned lock is
/// recovered: store operations either fully apply or leave the collection
/// as it was.
#[derive(Debug, Default)]
pub struct Shared<S> {
    inner: Arc<RwLock<S>>,
}

impl<S> Shared<S> {
    /// Wrap `store` in a new lock
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared access to the store
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the store
    pub fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CommentRepository> CommentRepository for Shared<S> {
    fn insert(&mut self, comment: Comment) -> Result<()> {
        self.write(|store| store.insert(comment))
    }

    fn get_by_id(&self, id: CommentId) -> Result<Comment> {
        self.read(|store| store.get_by_id(id))
    }

    fn get_all_by_post_id(&self, post_id: PostId) -> Vec<Comment> {
        self.read(|store| store.get_all_by_post_id(post_id))
    }
}

impl<S: PostRepository> PostRepository for Shared<S> {
    fn insert(&mut self, post: Post) -> Result<()> {
        self.write(|store| store.insert(post))
    }

    fn get_by_id(&self, id: PostId) -> Result<Post> {
        self.read(|store| store.get_by_id(id))
    }
}
