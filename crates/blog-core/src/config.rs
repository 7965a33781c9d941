//! Configuration management for blog-repo

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Comment validation settings
    pub comments: CommentConfig,
    /// Fixture seeding settings
    pub fixtures: FixturesConfig,
}

impl BlogConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BlogConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    fn check(&self) -> Result<()> {
        if self.comments.max_comment_length == Some(0) {
            return Err(BlogError::Config(
                "comments.max_comment_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Treat whitespace-only author and body as missing
    pub trim_whitespace: bool,
    /// Maximum comment body length in characters
    pub max_comment_length: Option<usize>,
}

/// Fixture-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON file with posts and comments to seed the stores with
    pub path: Option<PathBuf>,
}
