//! Widgets for the feed screen
//!
//! Posts and comments are turned into styled lines; the app stacks them in a
//! scrolling paragraph. Bars, the editor and the help overlay draw directly
//! into a frame.

pub mod bars;
pub mod comment;
pub mod editor;
pub mod help;
pub mod post;

pub use bars::{render_status_bar, render_title_bar, StatusInfo};
pub use comment::comment_lines;
pub use editor::render_editor;
pub use help::render_help;
pub use post::{post_lines, PostSelection};
