//! Term card — detail view of the highlighted term.
//!
//! Shows the name with its domain badge, the definition, the examples (unless
//! hidden with `:examples`), and a marker when the term carries a diagram.
//! Diagrams are markup meant for a browser and are not drawn in the terminal.

use crate::theme::Theme;
use gloss_core::Term;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct TermCard<'a> {
    term: Option<&'a Term>,
    show_examples: bool,
    theme: &'a Theme,
}

impl<'a> TermCard<'a> {
    pub fn new(term: Option<&'a Term>, show_examples: bool, theme: &'a Theme) -> Self {
        Self { term, show_examples, theme }
    }
}

impl Widget for TermCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Definition")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(term) = self.term else {
            Paragraph::new(Line::styled("Nothing selected", self.theme.muted)).render(inner, buf);
            return;
        };

        Paragraph::new(card_lines(term, self.show_examples, self.theme))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn card_lines<'t>(term: &'t Term, show_examples: bool, theme: &Theme) -> Vec<Line<'t>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(term.term.as_str(), theme.term),
            Span::raw("  "),
            Span::styled(term.domain.as_str(), theme.domain_style(&term.domain)),
        ]),
        Line::raw(""),
        Line::styled(term.definition.as_str(), theme.definition),
    ];

    if show_examples && !term.examples.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Examples:", theme.title));
        lines.extend(
            term.examples
                .iter()
                .map(|ex| Line::from(vec![Span::raw("  • "), Span::styled(ex.as_str(), theme.example)])),
        );
    }

    if !term.visual.trim().is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("◆ diagram available", theme.muted));
    }

    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
