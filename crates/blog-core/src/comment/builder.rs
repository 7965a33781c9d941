//! Comment builder for fluent API

use super::model::Comment;
use super::validator::CommentValidator;
use crate::error::Result;
use crate::types::{CommentId, PostId};
use chrono::{DateTime, Utc};

/// Builder for creating comments with fluent API
pub struct CommentBuilder {
    id: CommentId,
    post_id: PostId,
    author: String,
    comment: String,
    creation_date: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    /// Create a new builder for a comment on the given post
    pub fn new(id: CommentId, post_id: PostId) -> Self {
        Self {
            id,
            post_id,
            author: String::new(),
            comment: String::new(),
            creation_date: None,
        }
    }

    /// Set the author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the comment body
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the creation date
    pub fn created_at(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Stamp the creation date with the current time
    pub fn created_now(self) -> Self {
        self.created_at(Utc::now())
    }

    /// Build the comment, checking mandatory fields
    pub fn build(self) -> Result<Comment> {
        let comment = Comment {
            id: self.id,
            post_id: self.post_id,
            author: self.author,
            comment: self.comment,
            creation_date: self.creation_date,
        };

        CommentValidator::new().validate(&comment)?;
        Ok(comment)
    }
}
