//! Term list widget — the scrollable list of visible terms.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one term |
//! | `↓` / `j` | Move cursor down one term |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to first / last term |
//!
//! # Scroll semantics
//!
//! `cursor` is an index into the browser's current view. `offset` is the
//! view index of the first visible row. The cursor is kept inside the
//! visible window; moving it past an edge scrolls.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use gloss_core::{Browser, Term};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct TermListState {
    /// Index into the current view of the highlighted term.
    pub cursor: usize,
    /// View index of the first visible row.
    pub offset: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl Default for TermListState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            last_height: Cell::new(20),
        }
    }
}

impl TermListState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Back to the top. Call whenever the view is recomputed.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Handle a navigation event over a view of `len` terms.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        let page = self.height();
        let last = len - 1;

        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::PageUp => self.cursor.saturating_sub(page),
            AppEvent::PageDown => (self.cursor + page).min(last),
            AppEvent::JumpTop => 0,
            AppEvent::JumpBottom => last,
            _ => return,
        };
        self.scroll_to_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "terms: cursor moved");
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct TermList<'a> {
    state: &'a TermListState,
    browser: &'a Browser,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TermList<'a> {
    pub fn new(
        state: &'a TermListState,
        browser: &'a Browser,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, browser, focused, theme }
    }
}

impl Widget for TermList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!("Terms ({})", self.browser.visible_len()))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — draw always runs before the next event
        self.state.last_height.set(height);

        let total = self.browser.visible_len();
        if total == 0 {
            render_no_results(inner, buf, self.theme);
            return;
        }

        let start = self.state.offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);
        // Leave one column for the scrollbar.
        let name_width = (inner.width as usize).saturating_sub(2);

        let lines: Vec<Line> = self
            .browser
            .view()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(i, term)| {
                let line = render_row(term, name_width, self.theme);
                if i == self.state.cursor {
                    line.patch_style(self.theme.cursor)
                } else {
                    line
                }
            })
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

/// One row: the term name on the left, its domain badge right-aligned.
fn render_row(term: &Term, width: usize, theme: &Theme) -> Line<'static> {
    let badge = format!("[{}]", term.domain);
    let badge_len = badge.chars().count();
    let name_len = term.term.chars().count();
    let gap = width.saturating_sub(name_len + badge_len).max(1);

    Line::from(vec![
        Span::styled(term.term.clone(), theme.term),
        Span::raw(" ".repeat(gap)),
        Span::styled(badge, theme.domain_style(&term.domain)),
    ])
}

fn render_no_results(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let lines = vec![
        Line::raw(""),
        Line::styled("No terms found", theme.term),
        Line::styled("Try adjusting your search or filter", theme.muted),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
