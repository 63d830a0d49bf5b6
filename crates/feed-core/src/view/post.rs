//! Post view state: comment list, draft and comment views

use super::comment::CommentView;
use super::events::PostEvent;
use crate::comment::{CommentList, Draft, DraftValidator, LikeCount};
use crate::post::Post;
use crate::types::PostId;
use std::sync::mpsc::{self, Receiver, Sender};

/// Outcome of submitting the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The draft was appended to the comment list
    Published,
    /// The draft was empty; nothing changed except the validation message
    Rejected {
        /// Message now shown on the form
        message: String,
    },
}

impl Submission {
    /// Check if the comment went through
    pub fn is_published(&self) -> bool {
        matches!(self, Submission::Published)
    }
}

/// State owned by one rendered post
#[derive(Debug)]
pub struct PostView {
    post: Post,
    comments: CommentList,
    draft: Draft,
    validator: DraftValidator,
    views: Vec<CommentView>,
    events_tx: Sender<PostEvent>,
    events_rx: Receiver<PostEvent>,
}

impl PostView {
    /// Create a view whose thread starts with a single seed comment
    pub fn new(post: Post, seed_comment: &str) -> Self {
        Self::with_comments(post, CommentList::seeded(seed_comment))
    }

    /// Create a view with an explicit starting thread
    pub fn with_comments(post: Post, comments: CommentList) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let mut view = Self {
            post,
            comments,
            draft: Draft::new(),
            validator: DraftValidator::new(),
            views: Vec::new(),
            events_tx,
            events_rx,
        };
        view.reconcile();
        view
    }

    /// Replace the draft validator
    pub fn with_validator(mut self, validator: DraftValidator) -> Self {
        self.validator = validator;
        self
    }

    /// The post being shown
    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Post ID
    pub fn id(&self) -> PostId {
        self.post.id
    }

    /// Current comment thread
    pub fn comments(&self) -> &CommentList {
        &self.comments
    }

    /// One view per comment, in display order
    pub fn comment_views(&self) -> &[CommentView] {
        &self.views
    }

    /// Pending comment text
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the draft text
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Whether the publish control is enabled
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Submit the draft as a new comment at the end of the thread
    pub fn submit_comment(&mut self) -> Submission {
        if let Err(err) = self.validator.validate(self.draft.text()) {
            tracing::debug!(post = %self.post.id, error = %err, "comment rejected");
            let message = self.validator.required_message().to_string();
            self.draft.flag(message.clone());
            return Submission::Rejected { message };
        }

        let text = self.draft.take();
        tracing::debug!(post = %self.post.id, comment = %text, "comment published");
        self.comments.push(text);
        self.reconcile();
        Submission::Published
    }

    /// Remove every comment equal to `text`; returns how many were removed
    pub fn delete_comment(&mut self, text: &str) -> usize {
        let removed = self.comments.remove_all(text);
        if removed > 0 {
            tracing::debug!(post = %self.post.id, comment = %text, removed, "comment deleted");
            self.reconcile();
        }
        removed
    }

    /// Like the comment at `index`
    pub fn like_comment(&mut self, index: usize) -> Option<LikeCount> {
        let view = self.views.get_mut(index)?;
        view.like();
        Some(view.likes())
    }

    /// Forward a delete click to the comment at `index` and apply the
    /// resulting request; returns how many comments were removed
    pub fn request_delete(&mut self, index: usize) -> usize {
        match self.views.get(index) {
            Some(view) => {
                view.request_delete();
                self.process_events()
            }
            None => 0,
        }
    }

    /// Apply every pending request from comment views
    pub fn process_events(&mut self) -> usize {
        let mut removed = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                PostEvent::DeleteComment(text) => removed += self.delete_comment(&text),
            }
        }
        removed
    }

    /// Match comment views to the current list by key. Views whose key is
    /// still present keep their like count; new entries get fresh views.
    fn reconcile(&mut self) {
        let mut previous: Vec<Option<CommentView>> =
            std::mem::take(&mut self.views).into_iter().map(Some).collect();

        let mut views = Vec::with_capacity(self.comments.len());
        for text in self.comments.iter() {
            let reused = previous
                .iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|view| view.key().as_str() == text))
                .and_then(Option::take);

            views.push(reused.unwrap_or_else(|| CommentView::new(text, self.events_tx.clone())));
        }
        self.views = views;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{REQUIRED_MESSAGE, SEED_COMMENT};
    use crate::post::{Author, PostBuilder};
    use pretty_assertions::assert_eq;

    fn post() -> Post {
        PostBuilder::new(1)
            .author(Author::new("Diego Fernandes", "CTO @Rocketseat", ""))
            .paragraph("Fala galeraa 👋")
            .link("blog")
            .build()
            .unwrap()
    }

    fn texts(view: &PostView) -> Vec<&str> {
        view.comments().iter().collect()
    }

    #[test]
    fn test_starts_with_seed_comment() {
        let view = PostView::new(post(), SEED_COMMENT);
        assert_eq!(texts(&view), vec!["Post muito bacana, hein?!"]);
        assert_eq!(view.comment_views().len(), 1);
        assert!(view.draft().is_empty());
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        view.update_draft("Ótimo!");
        assert!(view.can_submit());

        assert_eq!(view.submit_comment(), Submission::Published);
        assert_eq!(texts(&view), vec!["Post muito bacana, hein?!", "Ótimo!"]);
        assert_eq!(view.draft().text(), "");
        assert_eq!(view.comment_views()[1].content(), "Ótimo!");
    }

    #[test]
    fn test_submit_grows_by_exactly_one() {
        for text in ["x", " ", "Ótimo!", "a\nb"] {
            let mut view = PostView::new(post(), SEED_COMMENT);
            let before = view.comments().len();
            view.update_draft(text);
            assert!(view.submit_comment().is_published());
            assert_eq!(view.comments().len(), before + 1);
            assert_eq!(view.comments().get(before), Some(text));
        }
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        assert!(!view.can_submit());

        let outcome = view.submit_comment();
        assert_eq!(
            outcome,
            Submission::Rejected {
                message: REQUIRED_MESSAGE.to_string()
            }
        );
        assert_eq!(view.comments().len(), 1);
        assert_eq!(view.draft().validation(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_update_draft_clears_validation() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        view.submit_comment();
        view.update_draft("o");
        assert!(view.draft().validation().is_none());
    }

    #[test]
    fn test_delete_removes_all_equal() {
        let comments: CommentList = ["a", "b", "a"].into_iter().collect();
        let mut view = PostView::with_comments(post(), comments);
        assert_eq!(view.delete_comment("a"), 2);
        assert_eq!(texts(&view), vec!["b"]);
        assert_eq!(view.comment_views().len(), 1);
    }

    #[test]
    fn test_delete_missing_leaves_list() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        assert_eq!(view.delete_comment("nope"), 0);
        assert_eq!(texts(&view), vec![SEED_COMMENT]);
    }

    #[test]
    fn test_request_delete_goes_through_post() {
        let comments: CommentList = ["a", "b", "a"].into_iter().collect();
        let mut view = PostView::with_comments(post(), comments);
        assert_eq!(view.request_delete(2), 2);
        assert_eq!(texts(&view), vec!["b"]);
    }

    #[test]
    fn test_request_delete_out_of_range() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        assert_eq!(view.request_delete(5), 0);
        assert_eq!(view.comments().len(), 1);
    }

    #[test]
    fn test_likes_survive_unrelated_changes() {
        let comments: CommentList = ["a", "b"].into_iter().collect();
        let mut view = PostView::with_comments(post(), comments);
        view.like_comment(1);
        view.like_comment(1);

        view.delete_comment("a");
        assert_eq!(view.comment_views()[0].likes().get(), 2);

        view.update_draft("c");
        view.submit_comment();
        assert_eq!(view.comment_views()[0].likes().get(), 2);
        assert_eq!(view.comment_views()[1].likes().get(), 0);
    }

    #[test]
    fn test_readded_comment_starts_fresh() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        view.like_comment(0);
        view.delete_comment(SEED_COMMENT);
        view.update_draft(SEED_COMMENT);
        view.submit_comment();
        assert_eq!(view.comment_views()[0].likes().get(), 0);
    }

    #[test]
    fn test_like_out_of_range() {
        let mut view = PostView::new(post(), SEED_COMMENT);
        assert!(view.like_comment(3).is_none());
    }

    #[test]
    fn test_duplicate_texts_get_own_views() {
        let comments: CommentList = ["a", "a"].into_iter().collect();
        let mut view = PostView::with_comments(post(), comments);
        view.like_comment(0);
        assert_eq!(view.comment_views()[0].likes().get(), 1);
        assert_eq!(view.comment_views()[1].likes().get(), 0);
    }
}
