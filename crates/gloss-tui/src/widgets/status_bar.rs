//! Status bar — the 1-line strip at the top of the screen.
//!
//! Shows the glossary title, the result summary for the current filter, and
//! right-aligned keybinding hints.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    summary: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(summary: &'a str, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" Interactive Math Glossary ", self.theme.title),
            Span::styled("│ ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(self.summary),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " /:search  q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        // Only draw the hints when they do not overwrite the summary.
        if hint_x >= area.x + line.width() as u16 {
            buf.set_string(hint_x, area.y, hint, self.theme.muted);
        }
    }
}
