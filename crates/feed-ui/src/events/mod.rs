//! Event handling

use anyhow::Result;
use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Nothing happened before the poll timeout
    Tick,
}

/// Reads terminal events with a poll timeout
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    /// Create a source that ticks after `tick_rate` without input
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next event
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            // Windows reports both press and release
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Event::Input(key),
            event::Event::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        })
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
