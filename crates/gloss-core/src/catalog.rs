//! Catalog — the full, immutable, alphabetised set of glossary terms.
//!
//! A [`Catalog`] is built once at startup from a `{ "terms": [...] }` JSON
//! document and never mutated afterwards. Construction validates every term
//! and sorts by name, so everything downstream can rely on both.

use crate::{error::DataLoadFailure, filter, types::Term};
use serde::Deserialize;
use std::{cmp::Reverse, collections::HashSet};

/// Wire shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    terms: Vec<Term>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    terms: Vec<Term>,
}

impl Catalog {
    /// Validate and sort `terms` into a catalog.
    ///
    /// `origin` names the source in error messages. Fails when a term has an
    /// empty name or domain, or when two terms share a name.
    pub fn new(terms: Vec<Term>, origin: &str) -> Result<Self, DataLoadFailure> {
        let mut seen = HashSet::with_capacity(terms.len());
        for (index, term) in terms.iter().enumerate() {
            let invalid = |reason: String| DataLoadFailure::InvalidTerm {
                origin: origin.to_string(),
                index,
                reason,
            };
            if term.term.trim().is_empty() {
                return Err(invalid("empty term name".to_string()));
            }
            if term.domain.trim().is_empty() {
                return Err(invalid(format!("term {:?} has an empty domain", term.term)));
            }
            if !seen.insert(term.term.as_str()) {
                return Err(invalid(format!("duplicate term {:?}", term.term)));
            }
        }

        let mut terms = terms;
        // Primary key ignores case so "angle" sorts next to "Angle". Ties put
        // the lowercase spelling first ("pi" before "Pi") and keep the order
        // total.
        terms.sort_by_cached_key(|t| (t.term.to_lowercase(), Reverse(t.term.clone())));
        Ok(Self { terms })
    }

    /// Parse a catalog document.
    pub fn from_json(bytes: &[u8], origin: &str) -> Result<Self, DataLoadFailure> {
        let doc: CatalogDocument =
            serde_json::from_slice(bytes).map_err(|source| DataLoadFailure::Malformed {
                origin: origin.to_string(),
                source,
            })?;
        Self::new(doc.terms, origin)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct domain labels in ascending order.
    pub fn domains(&self) -> Vec<String> {
        filter::distinct_domains(&self.terms)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
