//! feed-core - Core library for feed
//!
//! This crate provides the state model behind the feed UI: posts and their
//! content, per-post comment threads with drafts and like counters, the feed
//! container, feed file loading, configuration and exporters.

pub mod error;
pub mod types;
pub mod config;
pub mod post;
pub mod comment;
pub mod labels;
pub mod view;
pub mod feed;
pub mod export;

pub use error::{FeedError, Result};
pub use types::*;
