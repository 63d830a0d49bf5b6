//! Exporter trait and manager

use super::html::HtmlExporter;
use super::json::JsonExporter;
use super::markdown::MarkdownExporter;
use crate::config::Config;
use crate::error::{FeedError, Result};
use crate::feed::Feed;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Renders a whole feed, threads included, as one document
pub trait Exporter: Send + Sync {
    fn export(&self, feed: &Feed) -> Result<String>;

    /// Name used to select this renderer (`html`, `json-compact`, ...)
    fn format_name(&self) -> &str;

    /// Extension added to output paths that have none
    fn file_extension(&self) -> &str;
}

/// Settings shared by the document exporters
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Name shown above each comment
    pub comment_author: String,
    /// Avatar shown next to each comment; empty for none
    pub comment_avatar_url: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ExportOptions {
    /// Take the options from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            comment_author: config.comments.author.clone(),
            comment_avatar_url: config.comments.avatar_url.clone(),
        }
    }
}

/// Registry of document renderers, looked up by format name
pub struct ExportManager {
    renderers: BTreeMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// HTML, Markdown and both JSON flavours with default options
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    /// Built-in renderers configured with `options`
    pub fn with_options(options: ExportOptions) -> Self {
        let mut manager = Self {
            renderers: BTreeMap::new(),
        };

        manager.register(Box::new(HtmlExporter::new(options.clone())));
        manager.register(Box::new(MarkdownExporter::new(options)));
        manager.register(Box::new(JsonExporter::pretty()));
        manager.register(Box::new(JsonExporter::compact()));

        manager
    }

    /// Add a renderer; replaces any renderer with the same format name
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        let name = exporter.format_name().to_string();
        self.renderers.insert(name, exporter);
    }

    fn require(&self, format: &str) -> Result<&dyn Exporter> {
        self.get(format).ok_or_else(|| {
            FeedError::Validation(format!(
                "Unknown export format: {} (available: {})",
                format,
                self.available_formats().join(", ")
            ))
        })
    }

    /// Render the feed as `format`
    pub fn export(&self, feed: &Feed, format: &str) -> Result<String> {
        let renderer = self.require(format)?;
        tracing::info!(format, posts = feed.len(), "exporting feed");
        renderer.export(feed)
    }

    /// Render the feed into `path`. A path without an extension gets the
    /// renderer's one. The document is staged in a sibling `.tmp` file.
    pub fn export_to_file(&self, feed: &Feed, format: &str, path: &Path) -> Result<()> {
        let renderer = self.require(format)?;
        let document = self.export(feed, format)?;

        let target = match path.extension() {
            Some(_) => path.to_path_buf(),
            None => path.with_extension(renderer.file_extension()),
        };
        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let staging = target.with_extension("tmp");
        let mut file = fs::File::create(&staging)?;
        file.write_all(document.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staging, &target)?;
        tracing::debug!(path = %target.display(), "export written");
        Ok(())
    }

    /// Registered format names, sorted
    pub fn available_formats(&self) -> Vec<String> {
        self.renderers.keys().cloned().collect()
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.renderers.contains_key(format)
    }

    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.renderers.get(format).map(Box::as_ref)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
