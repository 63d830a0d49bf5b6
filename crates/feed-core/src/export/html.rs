//! HTML exporter

use super::exporter::{ExportOptions, Exporter};
use crate::error::Result;
use crate::feed::Feed;
use crate::labels;
use crate::post::ContentLine;
use crate::view::PostView;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the feed as a standalone HTML page
pub struct HtmlExporter {
    options: ExportOptions,
}

impl HtmlExporter {
    /// Create a new HTML exporter
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render one content line
    pub fn render_line(line: &ContentLine) -> String {
        match line {
            ContentLine::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
            ContentLine::Link(text) => {
                format!("<p><a href=\"#\">{}</a></p>", escape_html(text))
            }
        }
    }

    /// `<img>` tag for an avatar, or nothing when no URL is set
    fn avatar(url: &str) -> String {
        if url.is_empty() {
            String::new()
        } else {
            format!("<img class=\"avatar\" src=\"{}\" alt=\"\">", escape_html(url))
        }
    }

    /// Render one post with its form and comment thread
    pub fn render_post(&self, view: &PostView) -> String {
        let post = view.post();
        let mut out = String::new();

        out.push_str(&format!("<article class=\"post\" data-id=\"{}\">\n", post.id));
        out.push_str("  <header>\n");
        out.push_str(&format!(
            "    {}<div class=\"author\"><strong>{}</strong><span>{}</span></div>\n",
            Self::avatar(&post.author.avatar_url),
            escape_html(&post.author.name),
            escape_html(&post.author.role)
        ));
        let iso = post.published_iso();
        out.push_str(&format!("    <time datetime=\"{}\">{}</time>\n", iso, iso));
        out.push_str("  </header>\n");

        out.push_str("  <div class=\"content\">\n");
        for line in &post.content {
            out.push_str(&format!("    {}\n", Self::render_line(line)));
        }
        out.push_str("  </div>\n");

        out.push_str("  <form class=\"comment-form\">\n");
        out.push_str(&format!("    <strong>{}</strong>\n", labels::FEEDBACK_HEADING));
        out.push_str(&format!(
            "    <textarea name=\"comment\" placeholder=\"{}\" required>{}</textarea>\n",
            escape_html(labels::COMMENT_PLACEHOLDER),
            escape_html(view.draft().text())
        ));
        let disabled = if view.can_submit() { "" } else { " disabled" };
        out.push_str(&format!(
            "    <footer><button type=\"submit\"{}>{}</button></footer>\n",
            disabled,
            labels::PUBLISH
        ));
        out.push_str("  </form>\n");

        let avatar = Self::avatar(&self.options.comment_avatar_url);
        out.push_str("  <div class=\"comment-list\">\n");
        for comment in view.comment_views() {
            out.push_str("    <div class=\"comment\">\n");
            if !avatar.is_empty() {
                out.push_str(&format!("      {}\n", avatar));
            }
            out.push_str(&format!(
                "      <header><strong>{}</strong><button title=\"{}\">x</button></header>\n",
                escape_html(&self.options.comment_author),
                escape_html(labels::DELETE_COMMENT)
            ));
            out.push_str(&format!("      <p>{}</p>\n", escape_html(comment.content())));
            out.push_str(&format!(
                "      <footer><button>{} <span>{}</span></button></footer>\n",
                labels::APPLAUD,
                comment.likes()
            ));
            out.push_str("    </div>\n");
        }
        out.push_str("  </div>\n");
        out.push_str("</article>\n");
        out
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, feed: &Feed) -> Result<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n<title>Feed</title>\n</head>\n<body>\n<main>\n");
        for view in feed.posts() {
            out.push_str(&self.render_post(view));
        }
        out.push_str("</main>\n</body>\n</html>\n");
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "html"
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{CommentList, SEED_COMMENT};
    use crate::post::{Author, PostBuilder};

    fn view() -> PostView {
        let post = PostBuilder::new(1)
            .author(Author::new("Diego <3", "CTO", ""))
            .paragraph("hello")
            .link("blog")
            .build()
            .unwrap();
        PostView::new(post, SEED_COMMENT)
    }

    #[test]
    fn test_link_wrapped_in_anchor() {
        let html = HtmlExporter::render_line(&ContentLine::Link("blog".to_string()));
        assert_eq!(html, "<p><a href=\"#\">blog</a></p>");
    }

    #[test]
    fn test_paragraph_plain() {
        let html = HtmlExporter::render_line(&ContentLine::Paragraph("hi".to_string()));
        assert_eq!(html, "<p>hi</p>");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        let html = HtmlExporter::default().render_post(&view());
        assert!(html.contains("Diego &lt;3"));
    }

    #[test]
    fn test_lines_in_order() {
        let html = HtmlExporter::default().render_post(&view());
        let hello = html.find("<p>hello</p>").unwrap();
        let blog = html.find("<a href=\"#\">blog</a>").unwrap();
        assert!(hello < blog);
    }

    #[test]
    fn test_publish_disabled_when_draft_empty() {
        let mut view = view();
        let html = HtmlExporter::default().render_post(&view);
        assert!(html.contains("<button type=\"submit\" disabled>Publicar</button>"));

        view.update_draft("Ótimo!");
        let html = HtmlExporter::default().render_post(&view);
        assert!(html.contains("<button type=\"submit\">Publicar</button>"));
        assert!(html.contains(">Ótimo!</textarea>"));
    }

    #[test]
    fn test_comment_avatar_from_options() {
        let html = HtmlExporter::default().render_post(&view());
        assert!(html.contains(
            "<img class=\"avatar\" src=\"https://github.com/Diego3g.png\" alt=\"\">"
        ));

        let options = ExportOptions {
            comment_avatar_url: String::new(),
            ..ExportOptions::default()
        };
        let html = HtmlExporter::new(options).render_post(&view());
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_comments_with_likes() {
        let post = view().post().clone();
        let mut view = PostView::with_comments(post, ["a", "b"].into_iter().collect::<CommentList>());
        view.like_comment(1);
        let html = HtmlExporter::default().render_post(&view);
        assert!(html.contains("<p>a</p>"));
        assert!(html.contains("Aplaudir <span>1</span>"));
        assert!(html.contains("Aplaudir <span>0</span>"));
        assert_eq!(html.matches("class=\"comment\"").count(), 2);
    }
}
