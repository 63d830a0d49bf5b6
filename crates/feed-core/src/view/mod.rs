//! Component state for the feed UI
//!
//! A [`PostView`] owns the comment list and draft of one post and keeps one
//! [`CommentView`] per comment. Comment views never touch the list; they ask
//! their post to delete them by sending a [`PostEvent`] through the sender
//! they were built with.

pub mod events;
pub mod comment;
pub mod post;

pub use events::PostEvent;
pub use comment::CommentView;
pub use post::{PostView, Submission};
