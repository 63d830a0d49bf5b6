//! Ordered list of post views

use crate::comment::DraftValidator;
use crate::error::{FeedError, Result};
use crate::post::Post;
use crate::types::PostId;
use crate::view::PostView;
use std::collections::HashSet;

/// The post list: one [`PostView`] per post, in feed order
#[derive(Debug, Default)]
pub struct Feed {
    views: Vec<PostView>,
}

impl Feed {
    /// Build a feed; every thread starts with `seed_comment`
    pub fn new(posts: Vec<Post>, seed_comment: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(FeedError::Validation(format!(
                    "Duplicate post ID {} in feed",
                    post.id
                )));
            }
        }

        tracing::info!(posts = posts.len(), "feed built");
        Ok(Self {
            views: posts
                .into_iter()
                .map(|post| PostView::new(post, seed_comment))
                .collect(),
        })
    }

    /// Use a custom required-field message on every comment form
    pub fn with_required_message(mut self, message: &str) -> Self {
        self.views = std::mem::take(&mut self.views)
            .into_iter()
            .map(|view| view.with_validator(DraftValidator::with_message(message)))
            .collect();
        self
    }

    /// All post views in order
    pub fn posts(&self) -> &[PostView] {
        &self.views
    }

    /// Get a post view by ID
    pub fn get(&self, id: PostId) -> Option<&PostView> {
        self.views.iter().find(|view| view.id() == id)
    }

    /// Get a mutable post view by ID
    pub fn get_mut(&mut self, id: PostId) -> Option<&mut PostView> {
        self.views.iter_mut().find(|view| view.id() == id)
    }

    /// Get a post view by ID, failing if it is not in the feed
    pub fn post_mut(&mut self, id: PostId) -> Result<&mut PostView> {
        self.get_mut(id)
            .ok_or_else(|| FeedError::PostNotFound(id.to_string()))
    }

    /// Get a post view by position
    pub fn at(&self, index: usize) -> Option<&PostView> {
        self.views.get(index)
    }

    /// Get a mutable post view by position
    pub fn at_mut(&mut self, index: usize) -> Option<&mut PostView> {
        self.views.get_mut(index)
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Comments across all posts
    pub fn total_comments(&self) -> usize {
        self.views.iter().map(|view| view.comments().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::SEED_COMMENT;
    use crate::post::{Author, PostBuilder};

    fn post(id: u64) -> Post {
        PostBuilder::new(id)
            .author(Author::new("Author", "Role", ""))
            .paragraph(format!("post {}", id))
            .build()
            .unwrap()
    }

    #[test]
    fn test_one_view_per_post_in_order() {
        let feed = Feed::new(vec![post(2), post(1)], SEED_COMMENT).unwrap();
        let ids: Vec<_> = feed.posts().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![PostId(2), PostId(1)]);
        assert_eq!(feed.total_comments(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Feed::new(vec![post(1), post(1)], SEED_COMMENT);
        assert!(matches!(result, Err(FeedError::Validation(_))));
    }

    #[test]
    fn test_threads_are_independent() {
        let mut feed = Feed::new(vec![post(1), post(2)], SEED_COMMENT).unwrap();
        let first = feed.get_mut(PostId(1)).unwrap();
        first.update_draft("only here");
        first.submit_comment();

        assert_eq!(feed.get(PostId(1)).unwrap().comments().len(), 2);
        assert_eq!(feed.get(PostId(2)).unwrap().comments().len(), 1);
    }

    #[test]
    fn test_post_mut_missing() {
        let mut feed = Feed::new(vec![post(1)], SEED_COMMENT).unwrap();
        assert!(matches!(feed.post_mut(PostId(9)), Err(FeedError::PostNotFound(_))));
    }

    #[test]
    fn test_custom_required_message() {
        let mut feed = Feed::new(vec![post(1)], SEED_COMMENT)
            .unwrap()
            .with_required_message("Required");
        let view = feed.at_mut(0).unwrap();
        view.submit_comment();
        assert_eq!(view.draft().validation(), Some("Required"));
    }

    #[test]
    fn test_empty_feed() {
        let feed = Feed::new(Vec::new(), SEED_COMMENT).unwrap();
        assert!(feed.is_empty());
        assert!(feed.at(0).is_none());
    }
}
