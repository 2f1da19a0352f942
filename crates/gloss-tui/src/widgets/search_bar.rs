//! Search bar widget — free-text input at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor; `JumpTop` / `JumpBottom`
//!   (Home / End) jump to either end.
//!
//! The raw input is kept as typed; the browser normalises it (trim,
//! lowercase) when it is applied.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The search text as typed by the user.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Replace the input wholesale, leaving the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Handle a key event from the app shell. Returns `true` when the text
    /// changed and the view must be recomputed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(input = %self.input, cursor = self.cursor, "search: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = prev_boundary(&self.input, self.cursor);
                self.input.remove(prev);
                self.cursor = prev;
                tracing::debug!(input = %self.input, cursor = self.cursor, "search: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.input, self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                }
                false
            }
            AppEvent::JumpTop => {
                self.cursor = 0;
                false
            }
            AppEvent::JumpBottom => {
                self.cursor = self.input.len();
                false
            }
            _ => false,
        }
    }
}

/// Byte offset of the char boundary before `cursor` (0 at the start).
fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.input[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.input.is_empty() && !self.focused {
            Line::styled("press / to search for a math term…", self.theme.muted)
        } else {
            Line::from(self.state.input.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
