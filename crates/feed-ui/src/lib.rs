//! feed-ui - TUI library for feed
//!
//! This crate provides the Terminal User Interface for browsing the feed.
//!
//! # Overview
//!
//! The TUI provides:
//! - Post view with author header and content (links styled as anchors)
//! - Inline comment threads with like and delete actions
//! - A comment form with required-field validation
//! - Status bar with feed info
//!
//! # Example
//!
//! ```ignore
//! use feed_ui::{App, AppOptions};
//!
//! let mut app = App::new(feed, AppOptions::default());
//! app.run()?;
//! let feed = app.into_feed();
//! ```

pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod layout;
pub mod theme;

pub use app::{App, AppMode, AppOptions, AppState};
pub use input::{Action, InputHandler};
pub use theme::Theme;
