//! Messages sent from comment views to their post

/// Requests a comment view can make of the post that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    /// Remove every comment with this text
    DeleteComment(String),
}
