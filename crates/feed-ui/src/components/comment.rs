//! A single comment in the thread

use crate::theme::Theme;
use feed_core::labels;
use feed_core::view::CommentView;
use ratatui::prelude::*;

/// Lines for one comment: author with delete hint, text, like counter
pub fn comment_lines(
    comment: &CommentView,
    author: &str,
    selected: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let marker_style = Style::default().fg(theme.focus_border);
    let text_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    vec![
        Line::from(vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(
                author.to_string(),
                Style::default().fg(theme.author).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [x] {}", labels::DELETE_COMMENT),
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(comment.content().to_string(), text_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", labels::APPLAUD, comment.likes()),
                Style::default().fg(theme.like),
            ),
        ]),
    ]
}
