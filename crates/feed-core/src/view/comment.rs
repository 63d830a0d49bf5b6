//! Single comment view state

use super::events::PostEvent;
use crate::comment::LikeCount;
use crate::types::CommentKey;
use std::sync::mpsc::Sender;

/// One rendered comment: its text, its own like counter, and the capability
/// to ask the owning post for deletion.
#[derive(Debug)]
pub struct CommentView {
    key: CommentKey,
    content: String,
    likes: LikeCount,
    on_delete: Sender<PostEvent>,
}

impl CommentView {
    /// Create a view for a comment; likes start at zero
    pub fn new(content: impl Into<String>, on_delete: Sender<PostEvent>) -> Self {
        let content = content.into();
        Self {
            key: CommentKey::for_text(&content),
            content,
            likes: LikeCount::new(),
            on_delete,
        }
    }

    /// Reconciliation key
    pub fn key(&self) -> &CommentKey {
        &self.key
    }

    /// Comment text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current like count
    pub fn likes(&self) -> LikeCount {
        self.likes
    }

    /// Applaud this comment
    pub fn like(&mut self) {
        self.likes.increment();
        tracing::debug!(comment = %self.key, likes = self.likes.get(), "comment liked");
    }

    /// Ask the owning post to delete this comment.
    ///
    /// Returns false if the post is no longer listening.
    pub fn request_delete(&self) -> bool {
        match self.on_delete.send(PostEvent::DeleteComment(self.content.clone())) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(comment = %self.key, "delete request dropped, post view gone");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_like_n_times() {
        let (tx, _rx) = mpsc::channel();
        let mut view = CommentView::new("nice", tx);
        for _ in 0..3 {
            view.like();
        }
        assert_eq!(view.likes().get(), 3);
    }

    #[test]
    fn test_likes_are_independent() {
        let (tx, _rx) = mpsc::channel();
        let mut first = CommentView::new("a", tx.clone());
        let second = CommentView::new("b", tx);
        first.like();
        assert_eq!(first.likes().get(), 1);
        assert_eq!(second.likes().get(), 0);
    }

    #[test]
    fn test_request_delete_sends_text() {
        let (tx, rx) = mpsc::channel();
        let view = CommentView::new("bye", tx);
        assert!(view.request_delete());
        assert_eq!(rx.try_recv().unwrap(), PostEvent::DeleteComment("bye".to_string()));
        assert_eq!(view.content(), "bye");
    }

    #[test]
    fn test_request_delete_without_listener() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let view = CommentView::new("orphan", tx);
        assert!(!view.request_delete());
    }
}
