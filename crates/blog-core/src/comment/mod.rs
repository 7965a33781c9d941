//! Comment module
//!
//! Comment model, mandatory-field validation and a fluent builder.

pub mod model;
pub mod validator;
pub mod builder;

pub use model::*;
pub use validator::{CommentField, CommentValidator, FieldViolation};
pub use builder::CommentBuilder;
