//! Ratatui widgets for the gloss TUI.

pub mod command_bar;
pub mod domain_list;
pub mod help;
pub mod search_bar;
pub mod status_bar;
pub mod term_card;
pub mod term_list;
