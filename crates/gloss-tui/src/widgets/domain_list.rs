//! Domain list widget — the filter pane on the left.
//!
//! The first row is always "All Terms"; the remaining rows are the catalog's
//! distinct domains in alphabetical order, each with its term count.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.
//! - `Enter`, `Space` or `→`/`l` apply the domain under the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use gloss_core::{Catalog, DomainFilter};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    pub filter: DomainFilter,
    /// Number of catalog terms in this domain.
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct DomainListState {
    pub entries: Vec<DomainEntry>,
    pub cursor: usize,
}

impl DomainListState {
    pub fn new(catalog: &Catalog) -> Self {
        let mut entries = vec![DomainEntry {
            filter: DomainFilter::All,
            count: catalog.len(),
        }];
        entries.extend(catalog.domains().into_iter().map(|label| {
            let count = catalog.terms().iter().filter(|t| t.domain == label).count();
            DomainEntry {
                filter: DomainFilter::Specific(label),
                count,
            }
        }));
        Self { entries, cursor: 0 }
    }

    /// Handle an [`AppEvent`]. Returns the domain to apply when the user
    /// confirms a row; pure cursor movement returns `None`.
    pub fn handle(&mut self, event: &AppEvent) -> Option<DomainFilter> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "domains: cursor up");
                None
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "domains: cursor down");
                None
            }
            AppEvent::JumpTop => {
                self.cursor = 0;
                None
            }
            AppEvent::JumpBottom => {
                self.cursor = self.entries.len().saturating_sub(1);
                None
            }
            AppEvent::Enter | AppEvent::Char(' ') | AppEvent::Nav(Direction::Right) => {
                let picked = self.entries.get(self.cursor).map(|e| e.filter.clone());
                tracing::debug!(domain = ?picked, "domains: apply");
                picked
            }
            _ => None,
        }
    }

    /// Move the cursor onto `filter`, if it is listed. Used when the domain is
    /// changed from the command line so the pane stays in sync.
    pub fn focus_on(&mut self, filter: &DomainFilter) {
        if let Some(i) = self.entries.iter().position(|e| e.filter == *filter) {
            self.cursor = i;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct DomainList<'a> {
    state: &'a DomainListState,
    /// The domain currently filtering the view.
    active: &'a DomainFilter,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> DomainList<'a> {
    pub fn new(
        state: &'a DomainListState,
        active: &'a DomainFilter,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, active, focused, theme }
    }
}

impl Widget for DomainList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Domains")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.filter == *self.active {
                    Span::styled("● ", self.theme.selected_domain)
                } else {
                    Span::raw("  ")
                };
                let label = match &entry.filter {
                    DomainFilter::All => Span::styled("All Terms", self.theme.term),
                    DomainFilter::Specific(label) => {
                        Span::styled(label.clone(), self.theme.domain_style(label))
                    }
                };
                let count = Span::styled(format!(" ({})", entry.count), self.theme.muted);
                ListItem::new(Line::from(vec![marker, label, count]))
            })
            .collect();

        let list = List::new(items).highlight_style(self.theme.cursor);
        let selected = self.focused.then_some(self.state.cursor);
        let mut list_state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
