//! Application state and main app structure

use anyhow::Result;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feed_core::config::Config;
use feed_core::feed::Feed;
use feed_core::view::{PostView, Submission};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};

use crate::components::{
    post_lines, render_editor, render_help, render_status_bar, render_title_bar, PostSelection,
    StatusInfo,
};
use crate::events::{Event, EventSource};
use crate::input::{Action, InputHandler};
use crate::layout::LayoutManager;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing posts and comments
    #[default]
    Normal,
    /// Typing into the comment form
    Insert,
    /// Help overlay
    Help,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Selected post index
    pub current_post: usize,
    /// Selected comment within the current post
    pub current_comment: Option<usize>,
    /// Editor cursor, in chars
    pub editor_cursor: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Presentation settings
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Colors
    pub theme: Theme,
    /// Name shown above every comment
    pub comment_author: String,
    /// Show the key hint in the status bar
    pub show_help_hint: bool,
}

impl AppOptions {
    /// Take the options from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: Theme::from_name(&config.ui.theme),
            comment_author: config.comments.author.clone(),
            show_help_hint: config.ui.show_help_hint,
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    feed: Feed,
    options: AppOptions,
    input: InputHandler,
    layout: LayoutManager,
}

impl App {
    /// Create a new app over the given feed
    pub fn new(feed: Feed, options: AppOptions) -> Self {
        Self {
            state: AppState::new(),
            feed,
            options,
            input: InputHandler::new(),
            layout: LayoutManager::new(),
        }
    }

    /// The feed as it stands
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Give the feed back, with every comment made during the session
    pub fn into_feed(self) -> Feed {
        self.feed
    }

    /// Run the main application loop on the real terminal
    pub fn run(&mut self) -> Result<()> {
        let mut tui = TerminalGuard::enter()?;
        let events = EventSource::default();

        loop {
            tui.terminal.draw(|frame| self.render(frame))?;

            match events.next()? {
                Event::Input(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    tracing::trace!(width, height, "terminal resized");
                }
                Event::Tick => {}
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.input.map(self.state.mode, key) {
            self.apply(action);
        }
    }

    /// Apply an action to the state
    pub fn apply(&mut self, action: Action) {
        self.state.clear_message();

        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ShowHelp => self.state.mode = AppMode::Help,
            Action::CloseHelp => self.state.mode = AppMode::Normal,
            Action::NextPost => self.select_post(self.state.current_post + 1),
            Action::PrevPost => self.select_post(self.state.current_post.saturating_sub(1)),
            Action::NextComment => self.next_comment(),
            Action::PrevComment => self.prev_comment(),
            Action::FocusForm => self.focus_form(),
            Action::LeaveForm => self.state.mode = AppMode::Normal,
            Action::Insert(c) => self.insert_char(c),
            Action::Backspace => self.backspace(),
            Action::CursorLeft => {
                self.state.editor_cursor = self.state.editor_cursor.saturating_sub(1);
            }
            Action::CursorRight => {
                let len = self.draft_len();
                if self.state.editor_cursor < len {
                    self.state.editor_cursor += 1;
                }
            }
            Action::Submit => self.submit(),
            Action::Like => self.like(),
            Action::Delete => self.delete(),
        }
    }

    fn current_view(&self) -> Option<&PostView> {
        self.feed.at(self.state.current_post)
    }

    fn current_view_mut(&mut self) -> Option<&mut PostView> {
        self.feed.at_mut(self.state.current_post)
    }

    fn draft_len(&self) -> usize {
        self.current_view()
            .map(|v| v.draft().text().chars().count())
            .unwrap_or(0)
    }

    fn select_post(&mut self, index: usize) {
        let last = self.feed.len().saturating_sub(1);
        let index = index.min(last);
        if index != self.state.current_post {
            self.state.current_post = index;
            self.state.current_comment = None;
        }
    }

    fn next_comment(&mut self) {
        let count = self.current_view().map(|v| v.comments().len()).unwrap_or(0);
        if count == 0 {
            self.state.set_message("No comments on this post");
            return;
        }
        self.state.current_comment = Some(match self.state.current_comment {
            None => 0,
            Some(i) => (i + 1).min(count - 1),
        });
    }

    fn prev_comment(&mut self) {
        self.state.current_comment = match self.state.current_comment {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    fn focus_form(&mut self) {
        if self.current_view().is_none() {
            self.state.set_message("No post to comment on");
            return;
        }
        self.state.editor_cursor = self.draft_len();
        self.state.mode = AppMode::Insert;
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut String, usize) -> usize) {
        let cursor = self.state.editor_cursor;
        let Some(view) = self.current_view_mut() else {
            return;
        };
        let mut text = view.draft().text().to_string();
        let cursor = edit(&mut text, cursor);
        view.update_draft(text);
        self.state.editor_cursor = cursor;
    }

    fn insert_char(&mut self, c: char) {
        self.edit_draft(|text, cursor| {
            let byte_pos = char_to_byte_pos(text, cursor);
            text.insert(byte_pos, c);
            cursor + 1
        });
    }

    fn backspace(&mut self) {
        if self.state.editor_cursor == 0 {
            return;
        }
        self.edit_draft(|text, cursor| {
            let cursor = cursor - 1;
            let byte_pos = char_to_byte_pos(text, cursor);
            if byte_pos < text.len() {
                text.remove(byte_pos);
            }
            cursor
        });
    }

    fn submit(&mut self) {
        let Some(view) = self.current_view_mut() else {
            return;
        };
        match view.submit_comment() {
            Submission::Published => {
                self.state.mode = AppMode::Normal;
                self.state.editor_cursor = 0;
                self.state.set_message("Comment published");
            }
            Submission::Rejected { message } => self.state.set_message(message),
        }
    }

    fn like(&mut self) {
        let Some(index) = self.state.current_comment else {
            self.state.set_message("Select a comment first (Tab)");
            return;
        };
        if let Some(view) = self.current_view_mut() {
            view.like_comment(index);
        }
    }

    fn delete(&mut self) {
        let Some(index) = self.state.current_comment else {
            self.state.set_message("Select a comment first (Tab)");
            return;
        };
        let Some(view) = self.current_view_mut() else {
            return;
        };

        let removed = view.request_delete(index);
        let remaining = view.comments().len();
        self.state.current_comment = if remaining == 0 {
            None
        } else {
            Some(index.min(remaining - 1))
        };
        self.state.set_message(format!("Deleted {} comment(s)", removed));
    }

    /// Draw the whole screen
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let theme = &self.options.theme;
        let layout = self.layout.split(area, self.state.mode);

        render_title_bar(
            frame,
            layout.title,
            &format!("feed · {} posts", self.feed.len()),
            theme,
        );
        self.render_feed(frame, layout.body);

        if let (Some(editor), Some(view)) = (layout.editor, self.current_view()) {
            render_editor(frame, editor, view, self.state.editor_cursor, theme);
        }

        let info = StatusInfo {
            mode: self.state.mode,
            post_index: self.state.current_post,
            post_count: self.feed.len(),
            comment_count: self.current_view().map(|v| v.comments().len()).unwrap_or(0),
            message: self.state.message.as_deref(),
            show_hint: self.options.show_help_hint,
        };
        render_status_bar(frame, layout.status, &info, theme);

        if self.state.mode == AppMode::Help {
            render_help(frame, area, theme);
        }
    }

    fn render_feed(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.options.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.unfocus_border));

        if self.feed.is_empty() {
            frame.render_widget(Paragraph::new("No posts to display").block(block), area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        let mut post_start = 0;
        let mut focus_line = 0;
        for (index, view) in self.feed.posts().iter().enumerate() {
            let selected = index == self.state.current_post;
            let selection = PostSelection {
                selected,
                comment: if selected { self.state.current_comment } else { None },
                form_focused: selected && self.state.mode == AppMode::Insert,
            };
            let post = post_lines(view, selection, &self.options.comment_author, theme);

            if selected {
                post_start = lines.len();
                focus_line = post_start;
                if let Some(comment) = selection.comment {
                    // Each comment takes three lines at the end of the post
                    let from_end = view.comments().len().saturating_sub(comment) * 3;
                    focus_line += post.len().saturating_sub(from_end);
                }
            }

            lines.extend(post);
            lines.push(Line::default());
        }

        // Scroll is counted in logical lines; wrapped paragraphs may shift it
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = if focus_line + 3 > post_start + visible {
            focus_line + 3 - visible
        } else {
            post_start
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Convert character position to byte position
fn char_to_byte_pos(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Raw-mode alternate screen, restored on drop
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
