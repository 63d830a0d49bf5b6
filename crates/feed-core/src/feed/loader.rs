//! Feed file loading
//!
//! A feed file is a JSON or TOML document with a `posts` array.

use crate::error::{FeedError, Result};
use crate::post::Post;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of a feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedFile {
    /// Posts in feed order
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Supported feed file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl FeedFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(FeedFormat::Json),
            "toml" => Ok(FeedFormat::Toml),
            _ => Err(FeedError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads feed files
pub struct FeedLoader;

impl FeedLoader {
    /// Load the posts of a feed file
    pub fn load(path: &Path) -> Result<Vec<Post>> {
        let format = FeedFormat::from_path(path)?;

        if !path.exists() {
            return Err(FeedError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content, format)
            .map_err(|e| e.with_context(format!("Failed to load feed {}", path.display())))?;

        tracing::info!(path = %path.display(), posts = file.posts.len(), "feed file loaded");
        Ok(file.posts)
    }

    /// Parse feed file content
    pub fn parse(content: &str, format: FeedFormat) -> Result<FeedFile> {
        let file = match format {
            FeedFormat::Json => serde_json::from_str(content)?,
            FeedFormat::Toml => toml::from_str(content)?,
        };
        Ok(file)
    }

    /// Serialize posts into a feed file
    pub fn render(posts: &[Post], format: FeedFormat) -> Result<String> {
        let file = FeedFile {
            posts: posts.to_vec(),
        };
        let content = match format {
            FeedFormat::Json => serde_json::to_string_pretty(&file)?,
            FeedFormat::Toml => toml::to_string_pretty(&file)?,
        };
        Ok(content)
    }
}
