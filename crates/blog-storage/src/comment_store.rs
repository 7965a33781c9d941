//! In-memory comment store

use crate::repository::CommentRepository;
use blog_core::comment::{Comment, CommentValidator};
use blog_core::error::{BlogError, EntityKind, Result};
use blog_core::types::{CommentId, PostId};
use tracing::{debug, trace};

/// Comments kept in insertion order
///
/// Inserting scans the whole collection for the id before appending, and
/// appends at most one copy.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
    validator: CommentValidator,
}

impl CommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that checks inserts with a custom validator
    pub fn with_validator(validator: CommentValidator) -> Self {
        Self {
            comments: Vec::new(),
            validator,
        }
    }

    /// Create a store pre-filled with `seed`.
    ///
    /// Seeded comments are neither validated nor checked for duplicate ids.
    /// Lookups return the first matching record.
    pub fn with_seed(seed: Vec<Comment>) -> Self {
        debug!(count = seed.len(), "Seeded comment store");
        Self {
            comments: seed,
            validator: CommentValidator::new(),
        }
    }

    /// Replace the validator used for subsequent inserts
    pub fn set_validator(&mut self, validator: CommentValidator) {
        self.validator = validator;
    }

    /// Check if a comment with this id is stored
    pub fn contains(&self, id: CommentId) -> bool {
        self.comments.iter().any(|c| c.id == id)
    }

    /// Copy of every stored comment, in insertion order
    pub fn all(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    /// Number of stored comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if no comments are stored
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl CommentRepository for CommentStore {
    fn insert(&mut self, comment: Comment) -> Result<()> {
        self.validator.validate(&comment)?;

        if self.contains(comment.id) {
            return Err(BlogError::already_exists(EntityKind::Comment, comment.id));
        }

        debug!(id = %comment.id, post_id = %comment.post_id, "Inserted comment");
        self.comments.push(comment);
        Ok(())
    }

    fn get_by_id(&self, id: CommentId) -> Result<Comment> {
        trace!(%id, "Looking up comment");
        self.comments
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| BlogError::not_found(EntityKind::Comment, id))
    }

    fn get_all_by_post_id(&self, post_id: PostId) -> Vec<Comment> {
        trace!(%post_id, "Listing comments for post");
        self.comments
            .iter()
            .filter(|c| c.belongs_to(post_id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::comment::{CommentField, FieldViolation};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn create_test_comment(id: u64, post_id: u64) -> Comment {
        Comment {
            id: CommentId(id),
            post_id: PostId(post_id),
            author: format!("author-{id}"),
            comment: format!("comment body {id}"),
            creation_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, id as u32 % 60).unwrap()),
        }
    }

    fn ids(comments: &[Comment]) -> Vec<u64> {
        comments.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = CommentStore::new();
        let c1 = create_test_comment(1, 10);
        let c2 = create_test_comment(2, 10);

        store.insert(c2.clone()).unwrap();
        store.insert(c1.clone()).unwrap();

        assert_eq!(store.get_by_id(CommentId(1)).unwrap(), c1);
        assert_eq!(store.get_by_id(CommentId(2)).unwrap(), c2);
    }

    #[test]
    fn test_each_insert_stores_one_copy() {
        let mut store = CommentStore::new();
        for id in 1..=5 {
            store.insert(create_test_comment(id, 10)).unwrap();
        }

        assert_eq!(store.len(), 5);
        assert_eq!(ids(&store.all()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();
        store.insert(create_test_comment(2, 10)).unwrap();
        store.insert(create_test_comment(3, 20)).unwrap();
        let before = store.all();

        let duplicate = Comment {
            comment: "different body".to_string(),
            ..create_test_comment(3, 30)
        };
        let err = store.insert(duplicate).unwrap_err();

        assert!(matches!(
            err,
            BlogError::AlreadyExists { entity: EntityKind::Comment, id: 3 }
        ));
        assert_eq!(store.all(), before);
        assert_eq!(store.get_by_id(CommentId(3)).unwrap(), create_test_comment(3, 20));
        assert!(store.get_all_by_post_id(PostId(30)).is_empty());
    }

    #[test]
    fn test_duplicate_of_first_element_fails() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();
        store.insert(create_test_comment(2, 10)).unwrap();

        assert!(store.insert(create_test_comment(1, 10)).unwrap_err().is_already_exists());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_invalid_comment_leaves_store_unchanged() {
        let cases = vec![
            (Comment { id: CommentId(0), ..create_test_comment(9, 10) }, CommentField::Id),
            (Comment { comment: String::new(), ..create_test_comment(9, 10) }, CommentField::Comment),
            (Comment { post_id: PostId(0), ..create_test_comment(9, 10) }, CommentField::PostId),
            (Comment { author: String::new(), ..create_test_comment(9, 10) }, CommentField::Author),
            (Comment { creation_date: None, ..create_test_comment(9, 10) }, CommentField::CreationDate),
        ];

        for (comment, field) in cases {
            let mut store = CommentStore::new();
            match store.insert(comment) {
                Err(BlogError::Validation { entity, violations }) => {
                    assert_eq!(entity, EntityKind::Comment);
                    assert_eq!(violations, vec![FieldViolation::Missing(field)]);
                }
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_validation_runs_before_duplicate_check() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();

        let invalid_duplicate = Comment {
            author: String::new(),
            ..create_test_comment(1, 10)
        };
        assert!(store.insert(invalid_duplicate).unwrap_err().is_validation());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_id_on_empty_store() {
        let store = CommentStore::new();
        for id in [0, 1, u64::MAX] {
            let err = store.get_by_id(CommentId(id)).unwrap_err();
            assert!(matches!(
                err,
                BlogError::NotFound { entity: EntityKind::Comment, id: found } if found == id
            ));
        }
    }

    #[test]
    fn test_get_by_id_finds_last_element() {
        let mut store = CommentStore::new();
        for id in 1..=4 {
            store.insert(create_test_comment(id, 10)).unwrap();
        }

        assert_eq!(store.get_by_id(CommentId(4)).unwrap().id, CommentId(4));
        assert!(store.get_by_id(CommentId(5)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_by_id_is_idempotent() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();

        let first = store.get_by_id(CommentId(1)).unwrap();
        let second = store.get_by_id(CommentId(1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_returned_comment_is_a_copy() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();

        let mut copy = store.get_by_id(CommentId(1)).unwrap();
        copy.comment = "edited".to_string();
        assert_eq!(copy.comment, "edited");

        assert_eq!(store.get_by_id(CommentId(1)).unwrap(), create_test_comment(1, 10));
    }

    #[test]
    fn test_get_all_by_post_id() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();
        store.insert(create_test_comment(3, 20)).unwrap();
        store.insert(create_test_comment(2, 10)).unwrap();
        store.insert(create_test_comment(4, 10)).unwrap();

        assert_eq!(ids(&store.get_all_by_post_id(PostId(10))), vec![1, 2, 4]);
        assert_eq!(ids(&store.get_all_by_post_id(PostId(20))), vec![3]);
    }

    #[test]
    fn test_get_all_by_post_id_scenario() {
        let mut store = CommentStore::new();
        store.insert(create_test_comment(1, 10)).unwrap();
        store.insert(create_test_comment(2, 10)).unwrap();
        store.insert(create_test_comment(3, 20)).unwrap();

        assert_eq!(
            store.get_all_by_post_id(PostId(10)),
            vec![create_test_comment(1, 10), create_test_comment(2, 10)]
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_all_by_post_id_empty() {
        let mut store = CommentStore::new();
        assert_eq!(store.get_all_by_post_id(PostId(10)), Vec::<Comment>::new());

        store.insert(create_test_comment(1, 10)).unwrap();
        assert!(store.get_all_by_post_id(PostId(99)).is_empty());
    }

    #[test]
    fn test_seed_bypasses_validation() {
        let invalid = Comment {
            author: String::new(),
            creation_date: None,
            ..create_test_comment(7, 10)
        };
        let store = CommentStore::with_seed(vec![invalid.clone()]);

        assert_eq!(store.get_by_id(CommentId(7)).unwrap(), invalid);
    }

    #[test]
    fn test_seed_with_duplicates_returns_first() {
        let first = create_test_comment(1, 10);
        let second = Comment {
            comment: "second".to_string(),
            ..create_test_comment(1, 10)
        };
        let mut store = CommentStore::with_seed(vec![first.clone(), second]);

        assert_eq!(store.get_by_id(CommentId(1)).unwrap(), first);
        assert_eq!(store.get_all_by_post_id(PostId(10)).len(), 2);
        assert!(store.insert(create_test_comment(1, 10)).unwrap_err().is_already_exists());
    }

    #[test]
    fn test_insert_after_seed() {
        let mut store = CommentStore::with_seed(vec![create_test_comment(1, 10)]);
        store.insert(create_test_comment(2, 10)).unwrap();

        assert_eq!(ids(&store.get_all_by_post_id(PostId(10))), vec![1, 2]);
    }

    #[test]
    fn test_custom_validator() {
        let mut store = CommentStore::with_validator(CommentValidator::with_max_length(4));
        let long = Comment {
            comment: "too long".to_string(),
            ..create_test_comment(1, 10)
        };
        assert!(store.insert(long).unwrap_err().is_validation());

        store.set_validator(CommentValidator::new());
        let long = Comment {
            comment: "too long".to_string(),
            ..create_test_comment(1, 10)
        };
        store.insert(long).unwrap();
        assert!(store.contains(CommentId(1)));
    }
}
