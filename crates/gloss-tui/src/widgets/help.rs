//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("Tab / Shift+Tab", "Cycle focus: domains → terms → search"),
    ("/", "Focus search bar"),
    ("Escape", "Clear search and leave the search bar"),
    ("↑ k  /  ↓ j", "Move through domains or terms"),
    ("Enter / Space", "Filter by the highlighted domain"),
    ("PageUp  /  Ctrl+u", "Page up the term list"),
    ("PageDown / Ctrl+d", "Page down the term list"),
    ("g  /  G", "First / last term"),
    (":", "Command line (:help for commands)"),
    ("?", "Toggle this help popup"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":domain <name|all>", "Filter by domain"),
    (":search <text>", "Set the search text"),
    (":clear", "Reset search and domain"),
    (":examples", "Show / hide examples"),
    (":theme <name>", "default, gruvbox"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + COMMANDS.len() + 4) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" gloss — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let row = |(key, desc): &(&str, &str)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<22}", key),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(desc.to_string()),
            ])
        };

        let mut lines: Vec<Line> = BINDINGS.iter().map(row).collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled("  Commands", self.theme.title));
        lines.extend(COMMANDS.iter().map(row));

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
