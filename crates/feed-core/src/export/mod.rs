//! Export functionality for feeds
//!
//! Renders the current feed state, comments and like counts included, as a
//! static document.
//!
//! # Overview
//!
//! Export functionality supports:
//! - HTML (one `<article>` per post, links wrapped in anchors)
//! - Markdown (human-readable digest)
//! - JSON (compact and pretty-printed)
//!
//! # Example
//!
//! ```ignore
//! use feed_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let html = manager.export(&feed, "html")?;
//! ```

mod exporter;
mod html;
mod json;
mod markdown;

pub use exporter::{ExportManager, ExportOptions, Exporter};
pub use html::{escape_html, HtmlExporter};
pub use json::{ExportComment, ExportData, ExportPost, JsonExporter};
pub use markdown::{escape_markdown, MarkdownExporter};
