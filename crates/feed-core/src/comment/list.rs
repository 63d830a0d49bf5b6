//! Ordered comment list owned by a post

use serde::{Deserialize, Serialize};

/// Comment every post thread starts with
pub const SEED_COMMENT: &str = "Post muito bacana, hein?!";

/// Ordered sequence of comment texts; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentList {
    comments: Vec<String>,
}

impl CommentList {
    /// Create a list holding a single seed comment
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            comments: vec![seed.into()],
        }
    }

    /// Append a comment at the end
    pub fn push(&mut self, text: impl Into<String>) {
        self.comments.push(text.into());
    }

    /// Remove every comment equal to `text`, returning how many went away
    pub fn remove_all(&mut self, text: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|comment| comment != text);
        before - self.comments.len()
    }

    /// Get a comment by position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.comments.get(index).map(String::as_str)
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().map(String::as_str)
    }

    /// All comments as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.comments
    }

    /// Number of comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl From<Vec<String>> for CommentList {
    fn from(comments: Vec<String>) -> Self {
        Self { comments }
    }
}

impl<'a> FromIterator<&'a str> for CommentList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            comments: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
