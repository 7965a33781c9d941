//! Error types for blog-repo

use crate::comment::FieldViolation;
use std::fmt;
use thiserror::Error;

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Comment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Post => write!(f, "Post"),
            EntityKind::Comment => write!(f, "Comment"),
        }
    }
}

/// Main error type for blog-repo
#[derive(Debug, Error)]
pub enum BlogError {
    /// Insert rejected because mandatory fields are missing or malformed
    #[error("{entity} failed validation: {}", join_violations(.violations))]
    Validation {
        entity: EntityKind,
        violations: Vec<FieldViolation>,
    },

    /// Insert rejected because the id is already taken
    #[error("{entity} with id: {id} already exists in the repository")]
    AlreadyExists { entity: EntityKind, id: u64 },

    /// Lookup miss
    #[error("{entity} with id: {id} was not found in the repository")]
    NotFound { entity: EntityKind, id: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlogError {
    pub fn already_exists(entity: EntityKind, id: impl Into<u64>) -> Self {
        BlogError::AlreadyExists {
            entity,
            id: id.into(),
        }
    }

    pub fn not_found(entity: EntityKind, id: impl Into<u64>) -> Self {
        BlogError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound { .. })
    }

    /// Check if this is a duplicate id
    pub fn is_already_exists(&self) -> bool {
        matches!(self, BlogError::AlreadyExists { .. })
    }

    /// Check if this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, BlogError::Validation { .. })
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for blog-repo
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentField;

    #[test]
    fn test_already_exists_display() {
        let err = BlogError::already_exists(EntityKind::Comment, 7u64);
        assert_eq!(
            err.to_string(),
            "Comment with id: 7 already exists in the repository"
        );
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_not_found_display() {
        let err = BlogError::not_found(EntityKind::Post, 42u64);
        assert_eq!(err.to_string(), "Post with id: 42 was not found in the repository");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_display_lists_every_field() {
        let err = BlogError::Validation {
            entity: EntityKind::Comment,
            violations: vec![
                FieldViolation::Missing(CommentField::Author),
                FieldViolation::Missing(CommentField::CreationDate),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Comment failed validation: author is missing, creationDate is missing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BlogError = io_err.into();
        assert!(matches!(err, BlogError::Io(_)));
    }
}
