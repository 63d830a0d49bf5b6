//! Post builder for fluent API

use super::model::{Author, ContentLine, Post};
use crate::error::{FeedError, Result};
use crate::types::PostId;
use chrono::{DateTime, Utc};

/// Builder for creating posts with fluent API
pub struct PostBuilder {
    id: PostId,
    author: Option<Author>,
    published_at: Option<DateTime<Utc>>,
    content: Vec<ContentLine>,
}

impl PostBuilder {
    /// Create a new builder for the given post ID
    pub fn new(id: impl Into<PostId>) -> Self {
        Self {
            id: id.into(),
            author: None,
            published_at: None,
            content: Vec::new(),
        }
    }

    /// Set the author
    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the publish time
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Append a paragraph line
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentLine::Paragraph(text.into()));
        self
    }

    /// Append a link line
    pub fn link(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentLine::Link(text.into()));
        self
    }

    /// Build the post
    pub fn build(self) -> Result<Post> {
        let author = self.author.ok_or_else(|| {
            FeedError::Validation(format!("Post {} has no author", self.id))
        })?;

        if author.name.trim().is_empty() {
            return Err(FeedError::Validation(format!(
                "Post {} author name cannot be empty",
                self.id
            )));
        }

        Ok(Post {
            id: self.id,
            author,
            published_at: self.published_at.unwrap_or_else(Utc::now),
            content: self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn author() -> Author {
        Author::new("Mayk Brito", "Educator @Rocketseat", "https://github.com/maykbrito.png")
    }

    #[test]
    fn test_build_keeps_line_order() {
        let post = PostBuilder::new(2)
            .author(author())
            .paragraph("first")
            .link("second")
            .paragraph("third")
            .build()
            .unwrap();

        let kinds: Vec<_> = post.content.iter().map(|l| l.kind()).collect();
        assert_eq!(kinds, vec!["paragraph", "link", "paragraph"]);
        assert_eq!(post.id, PostId(2));
    }

    #[test]
    fn test_build_without_author_fails() {
        let result = PostBuilder::new(1).paragraph("orphan").build();
        assert!(matches!(result, Err(FeedError::Validation(_))));
    }

    #[test]
    fn test_build_with_blank_author_name_fails() {
        let result = PostBuilder::new(1)
            .author(Author::new("  ", "role", ""))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_publish_time() {
        let at = Utc.with_ymd_and_hms(2022, 5, 10, 20, 0, 0).unwrap();
        let post = PostBuilder::new(1).author(author()).published_at(at).build().unwrap();
        assert_eq!(post.published_at, at);
    }
}
