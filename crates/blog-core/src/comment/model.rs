//! Comment data model

use crate::types::{CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reader comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier
    #[serde(default)]
    pub id: CommentId,
    /// Post this comment belongs to
    #[serde(default)]
    pub post_id: PostId,
    /// Who wrote the comment
    #[serde(default)]
    pub author: String,
    /// Comment body
    #[serde(default)]
    pub comment: String,
    /// When the comment was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl Comment {
    /// Check whether this comment belongs to the given post
    pub fn belongs_to(&self, post_id: PostId) -> bool {
        self.post_id == post_id
    }
}
