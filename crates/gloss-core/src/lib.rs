//! gloss-core — interactive math glossary core library.
//!
//! This crate holds everything that does not touch a terminal or a network:
//! the [`Term`] model, the validated [`Catalog`], the pure filter engine, and
//! the [`Browser`] state object that ties them together.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Catalog ──► Filter ──► Browser ──► UI / headless printer
//! ```
//!
//! The catalog is loaded once; the browser recomputes its view synchronously
//! after every filter change.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use browser::Browser;
pub use catalog::Catalog;
pub use error::DataLoadFailure;
pub use types::{DomainFilter, FilterState, Term};
