//! Comment validation

use super::model::Comment;
use crate::config::CommentConfig;
use crate::error::{BlogError, EntityKind, Result};
use std::fmt;

/// Mandatory comment fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentField {
    Id,
    Comment,
    PostId,
    Author,
    CreationDate,
}

impl CommentField {
    /// Field name as it appears in serialized comments
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentField::Id => "id",
            CommentField::Comment => "comment",
            CommentField::PostId => "postId",
            CommentField::Author => "author",
            CommentField::CreationDate => "creationDate",
        }
    }
}

impl fmt::Display for CommentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reason a comment was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    /// Field is zero, empty or unset
    Missing(CommentField),
    /// Field is longer than the configured maximum (in characters)
    TooLong { field: CommentField, max: usize },
}

impl FieldViolation {
    pub fn field(&self) -> CommentField {
        match self {
            FieldViolation::Missing(field) => *field,
            FieldViolation::TooLong { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::Missing(field) => write!(f, "{} is missing", field),
            FieldViolation::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

/// Validator for comments
///
/// The default validator only checks the mandatory fields: a non-zero id and
/// post id, a non-empty author and body, and a creation date.
#[derive(Debug, Clone, Default)]
pub struct CommentValidator {
    trim_whitespace: bool,
    max_comment_length: Option<usize>,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with a maximum body length.
    ///
    /// A maximum of zero means no limit.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            trim_whitespace: false,
            max_comment_length: Some(max_length).filter(|max| *max > 0),
        }
    }

    /// Build a validator from the `[comments]` configuration section
    pub fn from_config(config: &CommentConfig) -> Self {
        Self {
            trim_whitespace: config.trim_whitespace,
            max_comment_length: config.max_comment_length.filter(|max| *max > 0),
        }
    }

    /// Treat whitespace-only author and body as missing
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    fn is_blank(&self, value: &str) -> bool {
        if self.trim_whitespace {
            value.trim().is_empty()
        } else {
            value.is_empty()
        }
    }

    /// Collect every violation, in field order
    pub fn violations(&self, comment: &Comment) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if comment.id.is_unset() {
            violations.push(FieldViolation::Missing(CommentField::Id));
        }

        if self.is_blank(&comment.comment) {
            violations.push(FieldViolation::Missing(CommentField::Comment));
        } else if let Some(max) = self.max_comment_length {
            if comment.comment.chars().count() > max {
                violations.push(FieldViolation::TooLong {
                    field: CommentField::Comment,
                    max,
                });
            }
        }

        if comment.post_id.is_unset() {
            violations.push(FieldViolation::Missing(CommentField::PostId));
        }

        if self.is_blank(&comment.author) {
            violations.push(FieldViolation::Missing(CommentField::Author));
        }

        if comment.creation_date.is_none() {
            violations.push(FieldViolation::Missing(CommentField::CreationDate));
        }

        violations
    }

    /// Validate a complete comment
    pub fn validate(&self, comment: &Comment) -> Result<()> {
        let violations = self.violations(comment);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(BlogError::Validation {
                entity: EntityKind::Comment,
                violations,
            })
        }
    }
}
