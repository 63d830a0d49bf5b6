//! A post: header, content, form summary and comment thread

use super::comment::comment_lines;
use crate::theme::Theme;
use feed_core::labels;
use feed_core::post::ContentLine;
use feed_core::view::PostView;
use ratatui::prelude::*;

/// How a post is selected on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostSelection {
    /// This is the current post
    pub selected: bool,
    /// Selected comment within the post
    pub comment: Option<usize>,
    /// The comment form has focus
    pub form_focused: bool,
}

/// Render a content line; links are styled as anchors
pub fn content_line(line: &ContentLine, theme: &Theme) -> Line<'static> {
    match line {
        ContentLine::Paragraph(text) => Line::from(text.clone()),
        ContentLine::Link(text) => Line::from(Span::styled(text.clone(), theme.link_style())),
    }
}

/// Lines for a whole post
pub fn post_lines(
    view: &PostView,
    selection: PostSelection,
    comment_author: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let post = view.post();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            post.author.name.clone(),
            Style::default().fg(theme.author).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(post.author.role.clone(), Style::default().fg(theme.muted)),
    ]));
    lines.push(Line::from(Span::styled(
        post.published_iso(),
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
    )));
    lines.push(Line::default());

    for line in &post.content {
        lines.push(content_line(line, theme));
    }
    lines.push(Line::default());

    lines.extend(form_lines(view, selection.form_focused, theme));
    lines.push(Line::default());

    for (index, comment) in view.comment_views().iter().enumerate() {
        let selected = selection.selected && selection.comment == Some(index);
        lines.extend(comment_lines(comment, comment_author, selected, theme));
    }

    let gutter = if selection.selected { "▌ " } else { "  " };
    let gutter_style = Style::default().fg(if selection.selected {
        theme.focus_border
    } else {
        theme.unfocus_border
    });

    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::styled(gutter, gutter_style)];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Inline summary of the comment form
fn form_lines(view: &PostView, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        labels::FEEDBACK_HEADING,
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let draft = view.draft();
    let field = if draft.is_empty() {
        Span::styled(
            labels::COMMENT_PLACEHOLDER,
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(draft.text().to_string())
    };
    let field_marker = if focused { "» " } else { "> " };
    lines.push(Line::from(vec![Span::raw(field_marker), field]));

    let button_style = if view.can_submit() {
        Style::default().fg(theme.focus_border).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
    };
    let mut footer = vec![Span::styled(format!("[{}]", labels::PUBLISH), button_style)];
    if let Some(message) = draft.validation() {
        footer.push(Span::raw("  "));
        footer.push(Span::styled(message.to_string(), Style::default().fg(theme.error)));
    }
    lines.push(Line::from(footer));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::comment::SEED_COMMENT;
    use feed_core::post::{Author, PostBuilder};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn view() -> PostView {
        let post = PostBuilder::new(1)
            .author(Author::new("Diego Fernandes", "CTO @Rocketseat", ""))
            .paragraph("Fala galeraa")
            .link("blog")
            .build()
            .unwrap();
        PostView::new(post, SEED_COMMENT)
    }

    #[test]
    fn test_link_is_styled_as_anchor() {
        let theme = Theme::default();
        let line = content_line(&ContentLine::Link("blog".to_string()), &theme);
        assert_eq!(line.spans[0].content, "blog");
        assert_eq!(line.spans[0].style, theme.link_style());

        let plain = content_line(&ContentLine::Paragraph("hi".to_string()), &theme);
        assert_eq!(plain.spans[0].style, Style::default());
    }

    #[test]
    fn test_post_lines_order() {
        let lines = post_lines(&view(), PostSelection::default(), "João", &Theme::default());
        let texts: Vec<String> = lines.iter().map(text).collect();

        let header = texts.iter().position(|t| t.contains("Diego Fernandes")).unwrap();
        let para = texts.iter().position(|t| t.contains("Fala galeraa")).unwrap();
        let link = texts.iter().position(|t| t.contains("blog")).unwrap();
        let form = texts.iter().position(|t| t.contains("Deixe seu feedback")).unwrap();
        let comment = texts.iter().position(|t| t.contains(SEED_COMMENT)).unwrap();
        assert!(header < para && para < link && link < form && form < comment);
    }

    #[test]
    fn test_placeholder_and_validation() {
        let mut view = view();
        let lines = post_lines(&view, PostSelection::default(), "João", &Theme::default());
        assert!(lines.iter().map(text).any(|t| t.contains("Deixe um comentário...")));

        view.submit_comment();
        let lines = post_lines(&view, PostSelection::default(), "João", &Theme::default());
        assert!(lines.iter().map(text).any(|t| t.contains("Esté campo é obrigatório!")));
    }

    #[test]
    fn test_selected_gutter() {
        let selection = PostSelection {
            selected: true,
            comment: Some(0),
            form_focused: false,
        };
        let lines = post_lines(&view(), selection, "João", &Theme::default());
        assert!(lines.iter().all(|l| text(l).starts_with("▌ ")));
        assert!(lines.iter().map(text).any(|t| t.contains("▶ João")));
    }
}
