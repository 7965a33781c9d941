//! blog-core - Core library for blog-repo
//!
//! This crate provides the shared vocabulary for the blog data-access layer:
//! identifiers, post and comment models, comment validation, the error type,
//! configuration and logging setup.

pub mod error;
pub mod types;
pub mod config;
pub mod logging;
pub mod comment;
pub mod post;

pub use error::{BlogError, EntityKind, Result};
pub use types::*;
