//! Comment thread building blocks
//!
//! The per-post comment list, the pending draft with its validator, and the
//! like counter kept by each rendered comment.

pub mod list;
pub mod draft;
pub mod validator;
pub mod like;

pub use list::{CommentList, SEED_COMMENT};
pub use draft::Draft;
pub use validator::{DraftValidator, REQUIRED_MESSAGE};
pub use like::LikeCount;
