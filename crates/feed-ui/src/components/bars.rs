//! Title and status bars

use crate::app::AppMode;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};

/// What the status bar reports
#[derive(Debug, Clone, Default)]
pub struct StatusInfo<'a> {
    /// Current mode
    pub mode: AppMode,
    /// Selected post index
    pub post_index: usize,
    /// Number of posts
    pub post_count: usize,
    /// Comments on the selected post
    pub comment_count: usize,
    /// Transient message that replaces the summary
    pub message: Option<&'a str>,
    /// Append the key hint
    pub show_hint: bool,
}

/// Draw the title bar
pub fn render_title_bar(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(format!(" {}", title)).style(
            Style::default()
                .bg(theme.bar_bg)
                .fg(theme.bar_fg)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

/// Status bar text
pub fn status_text(info: &StatusInfo) -> String {
    if let Some(message) = info.message {
        return format!(" {} ", message);
    }

    let mode = match info.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
        AppMode::Help => "HELP",
    };
    let position = if info.post_count == 0 {
        "no posts".to_string()
    } else {
        format!("post {}/{}", info.post_index + 1, info.post_count)
    };

    let mut text = format!(" {} | {} | {} comments ", mode, position, info.comment_count);
    if info.show_hint {
        text.push_str("| ? help ");
    }
    text
}

/// Draw the status bar
pub fn render_status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(status_text(info)).style(Style::default().bg(theme.bar_bg).fg(theme.bar_fg)),
        area,
    );
}
