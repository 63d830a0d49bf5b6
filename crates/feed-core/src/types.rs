//! Core type definitions for feed

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identity of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

impl std::str::FromStr for PostId {
    type Err = crate::FeedError;

    fn from_str(s: &str) -> crate::Result<Self> {
        s.trim().parse::<u64>().map(PostId).map_err(|_| {
            crate::FeedError::Validation(format!("Invalid post ID: {}", s))
        })
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key that identifies a rendered comment among its siblings.
///
/// Comments carry no identity of their own, so the text doubles as the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentKey(pub String);

impl CommentKey {
    /// Build the key for a comment text
    pub fn for_text(text: &str) -> Self {
        CommentKey(text.to_string())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
