//! Post data models

use crate::types::PostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Integer identity
    pub id: PostId,
    /// Who wrote it
    pub author: Author,
    /// When it was published
    pub published_at: DateTime<Utc>,
    /// Body, in display order
    pub content: Vec<ContentLine>,
}

impl Post {
    /// Iterate over the link lines of the body
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|line| match line {
            ContentLine::Link(text) => Some(text.as_str()),
            ContentLine::Paragraph(_) => None,
        })
    }

    /// Published timestamp in ISO-8601 form
    pub fn published_iso(&self) -> String {
        self.published_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Author metadata shown in a post header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name
    pub name: String,
    /// Role or title
    pub role: String,
    /// Avatar image URL (kept as data, never fetched)
    #[serde(default)]
    pub avatar_url: String,
}

impl Author {
    /// Create a new author
    pub fn new(name: impl Into<String>, role: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// One unit of a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentLine {
    /// Plain paragraph
    Paragraph(String),
    /// Paragraph rendered as a hyperlink
    Link(String),
}

impl ContentLine {
    /// The text of the line regardless of kind
    pub fn text(&self) -> &str {
        match self {
            ContentLine::Paragraph(text) | ContentLine::Link(text) => text,
        }
    }

    /// Check if this line is a link
    pub fn is_link(&self) -> bool {
        matches!(self, ContentLine::Link(_))
    }

    /// Kind name as used in feed files
    pub fn kind(&self) -> &'static str {
        match self {
            ContentLine::Paragraph(_) => "paragraph",
            ContentLine::Link(_) => "link",
        }
    }
}
