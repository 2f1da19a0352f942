//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `Shift+Tab`             | `FocusPrev`                |
//! | `/`                     | `SearchFocus`              |
//! | `PageUp`, `Ctrl+u`      | `PageUp`                   |
//! | `PageDown`, `Ctrl+d`    | `PageDown`                 |
//! | `g`, `Home`             | `JumpTop`                  |
//! | `G`, `End`              | `JumpBottom`               |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text-input widget (search bar, command bar) is focused, the event
//! loop calls [`to_app_event_insert`] instead. Every printable character is
//! forwarded as `Char`; arrow keys still produce `Nav` so `←`/`→` move the
//! text cursor. Only `Ctrl+c`, `Escape`, `Enter`, `Tab` and `Backspace` keep
//! their special bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for list navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Move keyboard focus to the next pane.
    FocusNext,
    FocusPrev,
    /// Transfer focus to the search bar.
    SearchFocus,
    PageUp,
    PageDown,
    JumpTop,
    JumpBottom,
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    /// Confirm the active input or select the highlighted domain.
    Enter,
    Resize(u16, u16),
    /// Dismiss the active modal; in the search bar this also clears the search.
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
///
/// Returns `None` for events with no meaning to the application (mouse
/// events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::SearchFocus),

        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::PageDown),

        Home => Some(AppEvent::JumpTop),
        End => Some(AppEvent::JumpBottom),
        Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::JumpTop),
        // Uppercase: SHIFT may or may not be set depending on the terminal
        Char('G') => Some(AppEvent::JumpBottom),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Home => Some(AppEvent::JumpTop),
        End => Some(AppEvent::JumpBottom),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        BackTab => Some(AppEvent::FocusPrev),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
