//! Commands typed into the `:` command bar.
//!
//! [`Command::parse`] turns the text after `:` into a [`Command`]; the app
//! shell executes it against its state.

use crate::{app::AppState, theme::Theme};
use gloss_core::DomainFilter;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    /// Filter by a domain label, or `all`.
    Domain(DomainFilter),
    /// Replace the search text.
    Search(String),
    /// Reset both the search text and the domain.
    Clear,
    /// Toggle example display in the term card.
    Examples,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" | "h" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "examples" | "ex" => Ok(Command::Examples),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "domain" | "d" => {
                if rest.is_empty() {
                    Err("usage: domain <name|all>".to_string())
                } else if rest.eq_ignore_ascii_case("all") {
                    Ok(Command::Domain(DomainFilter::All))
                } else {
                    Ok(Command::Domain(DomainFilter::specific(rest)))
                }
            }
            // An empty search is allowed: `:search` clears the text.
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns `Err(message)` when the command names something that does not
/// exist; the caller shows it in the command bar.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
            tracing::debug!(theme = %s.theme.name, "theme switched");
        }
        Command::Domain(DomainFilter::All) => s.apply_domain(DomainFilter::All),
        Command::Domain(DomainFilter::Specific(label)) => {
            let known = s
                .browser
                .resolve_domain(&label)
                .map(str::to_string)
                .ok_or_else(|| format!("unknown domain: {label}"))?;
            s.apply_domain(DomainFilter::Specific(known));
        }
        Command::Search(text) => {
            s.search.set(&text);
            s.apply_search();
        }
        Command::Clear => {
            s.search.clear();
            s.browser.reset();
            s.domain_list.focus_on(&DomainFilter::All);
            s.term_list.reset();
        }
        Command::Examples => s.show_examples = !s.show_examples,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
