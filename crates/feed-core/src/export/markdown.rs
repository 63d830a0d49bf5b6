//! Markdown exporter

use super::exporter::{ExportOptions, Exporter};
use crate::error::Result;
use crate::feed::Feed;
use crate::labels;
use crate::post::ContentLine;
use crate::view::PostView;

/// Escape user text so it renders literally inside a Markdown line.
/// Newlines are folded to spaces to keep list items on one line.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '|' => {
                out.push('\\');
                out.push(c);
            }
            '#' | '-' | '+' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Markdown digest of the feed
pub struct MarkdownExporter {
    options: ExportOptions,
    /// Include the comment threads
    include_comments: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            include_comments: true,
        }
    }

    /// Set whether to include comment threads
    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    fn render_post(&self, view: &PostView) -> String {
        let post = view.post();
        let mut out = String::new();

        out.push_str(&format!("## {}\n\n", escape_markdown(&post.author.name)));
        out.push_str(&format!(
            "*{}* · {}\n\n",
            escape_markdown(&post.author.role),
            post.published_at.format("%Y-%m-%d %H:%M UTC")
        ));

        for line in &post.content {
            match line {
                ContentLine::Paragraph(text) => {
                    out.push_str(&format!("{}\n\n", escape_markdown(text)))
                }
                ContentLine::Link(text) => {
                    out.push_str(&format!("[{}](#)\n\n", escape_markdown(text)))
                }
            }
        }

        if self.include_comments {
            out.push_str(&format!("### Comments ({})\n\n", view.comments().len()));
            for comment in view.comment_views() {
                out.push_str(&format!(
                    "- **{}**: {} ({} {})\n",
                    escape_markdown(&self.options.comment_author),
                    escape_markdown(comment.content()),
                    labels::APPLAUD,
                    comment.likes()
                ));
            }
            out.push('\n');
        }

        out
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, feed: &Feed) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Feed\n\n");
        output.push_str(&format!(
            "{} posts, {} comments\n\n",
            feed.len(),
            feed.total_comments()
        ));

        for view in feed.posts() {
            output.push_str("---\n\n");
            output.push_str(&self.render_post(view));
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::SEED_COMMENT;
    use crate::feed::demo_posts;

    fn feed() -> Feed {
        Feed::new(demo_posts().unwrap(), SEED_COMMENT).unwrap()
    }

    #[test]
    fn test_markdown_structure() {
        let md = MarkdownExporter::default().export(&feed()).unwrap();
        assert!(md.starts_with("# Feed\n"));
        assert!(md.contains("2 posts, 2 comments"));
        assert!(md.contains("## Diego Fernandes"));
        assert!(md.contains("[jane.design/doctorcare](#)"));
        assert!(md.contains("- **João Medeiros**: Post muito bacana, hein?! (Aplaudir 0)"));
    }

    #[test]
    fn test_without_comments() {
        let md = MarkdownExporter::default()
            .with_comments(false)
            .export(&feed())
            .unwrap();
        assert!(!md.contains("### Comments"));
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("# x"), "\\# x");
        assert_eq!(escape_markdown("[a](b)"), "\\[a\\](b)");
        assert_eq!(escape_markdown("a # b - c"), "a # b - c");
        assert_eq!(escape_markdown("**bold** _it_"), "\\*\\*bold\\*\\* \\_it\\_");
        assert_eq!(escape_markdown("one\ntwo"), "one two");
    }

    #[test]
    fn test_comment_text_cannot_change_structure() {
        let mut feed = feed();
        let view = feed.at_mut(0).unwrap();
        view.update_draft("# x\n## [a](b)");
        view.submit_comment();

        let md = MarkdownExporter::default().export(&feed).unwrap();
        assert!(md.contains("**: \\# x ## \\[a\\](b) (Aplaudir 0)"));
        assert!(!md.lines().any(|line| line == "# x"));
        assert_eq!(md.lines().filter(|line| line.starts_with("# ")).count(), 1);
    }

    #[test]
    fn test_reflects_state() {
        let mut feed = feed();
        let view = feed.at_mut(0).unwrap();
        view.update_draft("Ótimo!");
        view.submit_comment();
        view.like_comment(1);

        let md = MarkdownExporter::default().export(&feed).unwrap();
        assert!(md.contains("Ótimo! (Aplaudir 1)"));
        assert!(md.contains("### Comments (2)"));
    }
}
