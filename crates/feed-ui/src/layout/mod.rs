//! Layout management

use crate::app::AppMode;
use ratatui::prelude::*;

/// Height of the comment editor, borders included
pub const EDITOR_HEIGHT: u16 = 4;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar
    pub title: Rect,
    /// Post list
    pub body: Rect,
    /// Comment editor, only while the form has focus
    pub editor: Option<Rect>,
    /// Status bar
    pub status: Rect,
}

/// Layout manager
pub struct LayoutManager;

impl LayoutManager {
    /// Create a new layout manager
    pub fn new() -> Self {
        Self
    }

    /// Split the screen for the given mode
    pub fn split(&self, area: Rect, mode: AppMode) -> AppLayout {
        if mode == AppMode::Insert {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(3),
                    Constraint::Length(EDITOR_HEIGHT),
                    Constraint::Length(1),
                ])
                .split(area);
            AppLayout {
                title: chunks[0],
                body: chunks[1],
                editor: Some(chunks[2]),
                status: chunks[3],
            }
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
                .split(area);
            AppLayout {
                title: chunks[0],
                body: chunks[1],
                editor: None,
                status: chunks[2],
            }
        }
    }

    /// Rectangle centered in `r`, sized by percentage
    pub fn centered(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup[1])[1]
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}
