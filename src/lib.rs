//! gloss — interactive math glossary for the terminal.
//!
//! The binary loads a catalog once (from the embedded glossary, a JSON file,
//! or an `http://` URL), then either opens the TUI or, with `--headless`,
//! prints the filtered view to stdout.
//!
//! ```text
//! CatalogSource ──► Catalog ──► Browser ──► TUI
//!                                  │
//!                                  └──────► headless printer
//! ```
//!
//! The library half exists so integration tests and benchmarks can drive the
//! headless printer without spawning the binary.

pub mod headless;

pub use gloss_core::{Browser, Catalog, DataLoadFailure, DomainFilter, FilterState, Term};
pub use gloss_source::CatalogSource;
