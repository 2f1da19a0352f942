//! Test builders — ergonomic constructors for `Term` and catalog documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use gloss_core::{Catalog, Term};

// ---------------------------------------------------------------------------
// TermBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Term`] test fixtures.
///
/// # Example
///
/// ```rust
/// let term = TermBuilder::new("Acute Angle", "Geometry")
///     .definition("An angle less than 90 degrees")
///     .example("30°")
///     .build();
/// ```
pub struct TermBuilder {
    term: String,
    domain: String,
    definition: String,
    examples: Vec<String>,
    visual: String,
}

impl TermBuilder {
    pub fn new(term: impl Into<String>, domain: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            definition: format!("Definition of {term}"),
            term,
            domain: domain.into(),
            examples: Vec::new(),
            visual: String::new(),
        }
    }

    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn visual(mut self, markup: impl Into<String>) -> Self {
        self.visual = markup.into();
        self
    }

    pub fn build(self) -> Term {
        Term {
            term: self.term,
            domain: self.domain,
            definition: self.definition,
            examples: self.examples,
            visual: self.visual,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// Serialise terms into a `{ "terms": [...] }` document.
pub fn catalog_document(terms: &[Term]) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "terms": terms })).unwrap()
}

/// Build a validated catalog, panicking on invalid input.
pub fn catalog_of(terms: Vec<Term>) -> Catalog {
    Catalog::new(terms, "test").unwrap()
}
