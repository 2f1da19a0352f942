//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        domain_list::{DomainList, DomainListState},
        help::HelpPopup,
        search_bar::{SearchBar, SearchBarState},
        status_bar::StatusBar,
        term_card::TermCard,
        term_list::{TermList, TermListState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gloss_core::{config::Config, Browser, Catalog, DomainFilter, Term};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Domains,
    Terms,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Domains => Focus::Terms,
            Focus::Terms => Focus::Search,
            Focus::Search | Focus::Command => Focus::Domains,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Domains => Focus::Search,
            Focus::Terms => Focus::Domains,
            Focus::Search | Focus::Command => Focus::Terms,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub browser: Browser,
    pub domain_list: DomainListState,
    pub term_list: TermListState,
    pub search: SearchBarState,
    pub command_bar: CommandBarState,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub show_examples: bool,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let domain_list = DomainListState::new(&catalog);
        let theme = Theme::by_name(&config.ui.theme);
        let show_examples = config.ui.show_examples;

        Self {
            browser: Browser::new(catalog),
            domain_list,
            term_list: TermListState::default(),
            search: SearchBarState::default(),
            command_bar: CommandBarState::default(),
            theme,
            config,
            show_help: false,
            show_examples,
            focus: Focus::Terms,
            prev_focus: Focus::Terms,
            quit: false,
        }
    }

    /// The term under the term-list cursor, if the view is not empty.
    pub fn selected_term(&self) -> Option<&Term> {
        self.browser.visible(self.term_list.cursor)
    }

    /// Push the search bar's text into the browser.
    pub fn apply_search(&mut self) {
        self.browser.set_search(&self.search.input);
        self.term_list.reset();
    }

    pub fn apply_domain(&mut self, domain: DomainFilter) {
        self.domain_list.focus_on(&domain);
        self.browser.select_domain(domain);
        self.term_list.reset();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        App {
            state: AppState::new(catalog, config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != ct_event::KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if is_insert_mode(self.state.focus) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        if s.focus == Focus::Command {
            handle_command_mode(s, event);
            return;
        }

        if s.focus == Focus::Search {
            handle_search(s, event);
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                s.focus = Focus::Search;
            }

            AppEvent::FocusNext => s.focus = s.focus.next(),
            AppEvent::FocusPrev => s.focus = s.focus.prev(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

fn handle_command_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => {
            let input = s.command_bar.input.clone();
            match Command::parse(&input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    s.focus = s.prev_focus;
                    match execute_command(s, cmd) {
                        Ok(()) => s.command_bar.clear(),
                        Err(msg) => {
                            s.command_bar.error = Some(msg);
                            s.focus = Focus::Command;
                        }
                    }
                }
                // Empty input — just close
                Err(msg) if msg.is_empty() => {
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                // Show the error; bar stays open
                Err(msg) => s.command_bar.error = Some(msg),
            }
        }
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

fn handle_search(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("search cleared, focus: Search -> Terms");
            s.search.clear();
            s.apply_search();
            s.focus = Focus::Terms;
        }
        AppEvent::Enter => s.focus = Focus::Terms,
        AppEvent::Quit => s.quit = true,
        AppEvent::FocusNext => s.focus = s.focus.next(),
        AppEvent::FocusPrev => s.focus = s.focus.prev(),
        // Up/down browse the results without leaving the search bar.
        ev @ (AppEvent::Nav(Direction::Up)
        | AppEvent::Nav(Direction::Down)
        | AppEvent::PageUp
        | AppEvent::PageDown) => {
            let len = s.browser.visible_len();
            s.term_list.handle(&ev, len);
        }
        other => {
            if s.search.handle(&other) {
                s.apply_search();
            }
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Domains => {
            if let Some(domain) = s.domain_list.handle(&event) {
                s.apply_domain(domain);
            }
        }
        Focus::Terms => {
            let len = s.browser.visible_len();
            s.term_list.handle(&event, len);
        }
        // handled before dispatch, should not reach here
        Focus::Search | Focus::Command => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | body | 3-line search bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let width_pct = state.config.ui.domain_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(width_pct), Constraint::Fill(1)])
        .split(vert[1]);

    // Right column: term list above the detail card
    let card_pct = state.config.ui.detail_pane_height_pct;
    let right = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Percentage(100 - card_pct),
            Constraint::Percentage(card_pct),
        ])
        .split(horiz[1]);

    let summary = state.browser.summary();
    frame.render_widget(StatusBar::new(&summary, &state.theme), vert[0]);
    frame.render_widget(
        DomainList::new(
            &state.domain_list,
            &state.browser.state().domain,
            state.focus == Focus::Domains,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        TermList::new(
            &state.term_list,
            &state.browser,
            state.focus == Focus::Terms,
            &state.theme,
        ),
        right[0],
    );
    frame.render_widget(
        TermCard::new(state.selected_term(), state.show_examples, &state.theme),
        right[1],
    );
    frame.render_widget(
        SearchBar::new(&state.search, state.focus == Focus::Search, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Search {
        let bar = SearchBar::new(&state.search, true, &state.theme);
        frame.set_cursor_position(bar.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
