//! Key help overlay

use crate::layout::LayoutManager;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};

/// Draw the help popup over `area`
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let heading = Style::default().fg(theme.focus_border);
    let text = vec![
        Line::from(Span::styled("feed", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Navigation", heading)),
        Line::from("  j/k         Next/Previous post"),
        Line::from("  Tab/S-Tab   Next/Previous comment"),
        Line::from(""),
        Line::from(Span::styled("Comments", heading)),
        Line::from("  c / i       Write a comment"),
        Line::from("  Enter       Publish (in the form)"),
        Line::from("  Esc         Leave the form"),
        Line::from("  l           Applaud selected comment"),
        Line::from("  x           Delete selected comment"),
        Line::from(""),
        Line::from(Span::styled("Other", heading)),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(theme.muted))),
    ];

    let help_area = LayoutManager::new().centered(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.focus_border)),
        ),
        help_area,
    );
}
