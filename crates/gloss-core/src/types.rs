//! Core types for gloss-core.
//!
//! This module defines the data structures shared across all layers: the
//! glossary [`Term`], the tagged [`DomainFilter`], and the user's
//! [`FilterState`].

use serde::{Deserialize, Serialize};

/// A single glossary entry as it appears in the catalog document.
///
/// `examples` and `visual` are optional in the source JSON; both deserialise
/// to an empty value when absent so predicates never deal with `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Display name, unique within a catalog.
    pub term: String,
    /// Category label, e.g. `"Geometry"`.
    pub domain: String,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Opaque diagram markup. Older catalogs call this field `svg`.
    #[serde(default, alias = "svg")]
    pub visual: String,
}

impl Term {
    /// True when `needle` (already lowercased) occurs in the name, the
    /// definition, or any example, ignoring case.
    pub fn mentions(&self, needle: &str) -> bool {
        self.term.to_lowercase().contains(needle)
            || self.definition.to_lowercase().contains(needle)
            || self
                .examples
                .iter()
                .any(|ex| ex.to_lowercase().contains(needle))
    }
}

/// Which domain the user has narrowed the view to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DomainFilter {
    /// No domain restriction.
    #[default]
    All,
    /// Only terms whose `domain` equals this label exactly.
    Specific(String),
}

impl DomainFilter {
    pub fn specific(label: impl Into<String>) -> Self {
        DomainFilter::Specific(label.into())
    }

    pub fn admits(&self, term: &Term) -> bool {
        match self {
            DomainFilter::All => true,
            DomainFilter::Specific(label) => term.domain == *label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DomainFilter::All)
    }
}

impl std::fmt::Display for DomainFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainFilter::All => write!(f, "All Terms"),
            DomainFilter::Specific(label) => write!(f, "{label}"),
        }
    }
}

/// The user-controlled half of the browser: selected domain plus search text.
///
/// The search text is stored normalised (trimmed, lowercased); the only way
/// to change it is [`FilterState::set_search`], so the invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub domain: DomainFilter,
    search: String,
}

impl FilterState {
    pub fn new(domain: DomainFilter, raw_search: &str) -> Self {
        let mut state = Self { domain, search: String::new() };
        state.set_search(raw_search);
        state
    }

    /// Normalised search text; empty when no search is active.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text with the trimmed, lowercased form of `raw`.
    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    /// True when either predicate narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.domain.is_all()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
