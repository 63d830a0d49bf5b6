//! Comment editor shown while the form has focus

use crate::theme::Theme;
use feed_core::labels;
use feed_core::view::PostView;
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

/// Draw the editor for `view`'s draft with the cursor at char `cursor`
pub fn render_editor(frame: &mut Frame, area: Rect, view: &PostView, cursor: usize, theme: &Theme) {
    let title = format!(
        "{} (Enter: {}, Esc: voltar)",
        labels::FEEDBACK_HEADING,
        labels::PUBLISH
    );
    let border = if view.draft().validation().is_some() {
        theme.error
    } else {
        theme.focus_border
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = view.draft();
    let mut lines = vec![if draft.is_empty() {
        Line::from(Span::styled(
            labels::COMMENT_PLACEHOLDER,
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(draft.text())
    }];
    if let Some(message) = draft.validation() {
        lines.push(Line::from(Span::styled(message, Style::default().fg(theme.error))));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor column is the display width of the text before it
    let prefix: String = draft.text().chars().take(cursor).collect();
    let display_width = prefix.width();

    if inner.width > 0 {
        let cursor_x = inner
            .x
            .saturating_add(display_width.min(u16::MAX as usize) as u16)
            .min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
