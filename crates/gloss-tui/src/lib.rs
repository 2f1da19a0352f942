//! gloss TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use gloss_core::{config::Config, Catalog};

/// Run the interactive browser over an already loaded catalog until the user
/// quits.
pub fn run(catalog: Catalog, config: Config) -> anyhow::Result<()> {
    tracing::info!(terms = catalog.len(), theme = %config.ui.theme, "starting tui");
    App::new(catalog, config).run()
}
