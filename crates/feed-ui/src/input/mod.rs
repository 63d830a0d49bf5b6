//! Input handling
//!
//! Maps key presses to [`Action`]s according to the current mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Open the help overlay
    ShowHelp,
    /// Close the help overlay
    CloseHelp,
    /// Select the next post
    NextPost,
    /// Select the previous post
    PrevPost,
    /// Select the next comment of the current post
    NextComment,
    /// Select the previous comment of the current post
    PrevComment,
    /// Focus the comment form
    FocusForm,
    /// Leave the comment form, keeping the draft
    LeaveForm,
    /// Type a character into the draft
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Move the cursor left
    CursorLeft,
    /// Move the cursor right
    CursorRight,
    /// Publish the draft
    Submit,
    /// Like the selected comment
    Like,
    /// Delete the selected comment
    Delete,
}

/// Input handler
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press in the given mode
    pub fn map(&self, mode: AppMode, key: KeyEvent) -> Option<Action> {
        match mode {
            AppMode::Normal => Self::map_normal(key),
            AppMode::Insert => Self::map_insert(key),
            AppMode::Help => Some(Action::CloseHelp),
        }
    }

    fn map_normal(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextPost,
            KeyCode::Char('k') | KeyCode::Up => Action::PrevPost,
            KeyCode::Tab => Action::NextComment,
            KeyCode::BackTab => Action::PrevComment,
            KeyCode::Char('c') | KeyCode::Char('i') => Action::FocusForm,
            KeyCode::Char('l') => Action::Like,
            KeyCode::Char('x') => Action::Delete,
            _ => return None,
        };
        Some(action)
    }

    fn map_insert(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Esc => Action::LeaveForm,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::Insert(c)
            }
            _ => return None,
        };
        Some(action)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
