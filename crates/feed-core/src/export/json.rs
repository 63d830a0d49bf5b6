//! JSON exporter

use super::exporter::Exporter;
use crate::error::Result;
use crate::feed::Feed;
use crate::post::{Author, ContentLine};
use crate::types::PostId;
use crate::view::PostView;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON exporter, pretty or compact
pub struct JsonExporter {
    pretty: bool,
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, feed: &Feed) -> Result<String> {
        let data = ExportData::from_feed(feed);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported feed
#[derive(Debug, Clone, Serialize)]
pub struct ExportData<'a> {
    /// Posts in feed order
    pub posts: Vec<ExportPost<'a>>,
}

impl<'a> ExportData<'a> {
    /// Snapshot a feed
    pub fn from_feed(feed: &'a Feed) -> Self {
        Self {
            posts: feed.posts().iter().map(ExportPost::from_view).collect(),
        }
    }
}

/// Exported post with its thread
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPost<'a> {
    pub id: PostId,
    pub author: &'a Author,
    pub published_at: DateTime<Utc>,
    pub content: &'a [ContentLine],
    pub comments: Vec<ExportComment<'a>>,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub draft: &'a str,
}

impl<'a> ExportPost<'a> {
    fn from_view(view: &'a PostView) -> Self {
        let post = view.post();
        Self {
            id: post.id,
            author: &post.author,
            published_at: post.published_at,
            content: &post.content,
            comments: view
                .comment_views()
                .iter()
                .map(|c| ExportComment {
                    content: c.content(),
                    likes: c.likes().get(),
                })
                .collect(),
            draft: view.draft().text(),
        }
    }
}

/// Exported comment
#[derive(Debug, Clone, Serialize)]
pub struct ExportComment<'a> {
    pub content: &'a str,
    pub likes: u64,
}
