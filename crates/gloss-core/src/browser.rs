//! Browser — explicit application state for one glossary session.
//!
//! Owns the immutable [`Catalog`], the mutable [`FilterState`], and the
//! current view. Every mutation recomputes the view before returning, so the
//! view a caller reads always matches the filter state it just set.

use crate::{
    catalog::Catalog,
    filter,
    types::{DomainFilter, FilterState, Term},
};

#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    state: FilterState,
    /// Catalog indices of the visible terms, in catalog order.
    view: Vec<usize>,
    domains: Vec<String>,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        let domains = catalog.domains();
        let mut browser = Self {
            catalog,
            state: FilterState::default(),
            view: Vec::new(),
            domains,
        };
        browser.refresh();
        browser
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Distinct domains of the catalog, ascending.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Map user input to a catalog domain label. An exact match wins; otherwise
    /// the first label equal ignoring ASCII case.
    pub fn resolve_domain(&self, label: &str) -> Option<&str> {
        let label = label.trim();
        self.domains
            .iter()
            .find(|d| d.as_str() == label)
            .or_else(|| self.domains.iter().find(|d| d.eq_ignore_ascii_case(label)))
            .map(String::as_str)
    }

    pub fn set_search(&mut self, raw: &str) {
        self.state.set_search(raw);
        tracing::debug!(search = %self.state.search(), "browser: search changed");
        self.refresh();
    }

    pub fn select_domain(&mut self, domain: DomainFilter) {
        tracing::debug!(domain = %domain, "browser: domain selected");
        self.state.domain = domain;
        self.refresh();
    }

    /// Drop both predicates, returning to the full catalog.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.refresh();
    }

    /// Terms currently visible, in catalog order.
    pub fn view(&self) -> impl ExactSizeIterator<Item = &Term> + '_ {
        self.view.iter().map(|&i| &self.catalog.terms()[i])
    }

    /// The `n`th visible term.
    pub fn visible(&self, n: usize) -> Option<&Term> {
        self.view.get(n).and_then(|&i| self.catalog.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    pub fn summary(&self) -> String {
        filter::summary(self.view.len(), self.catalog.len(), &self.state)
    }

    fn refresh(&mut self) {
        let terms = self.catalog.terms();
        // filter() preserves order, so walking the catalog alongside its
        // output recovers the indices without a second search.
        let visible = filter::filter(terms, &self.state);
        let mut wanted = visible.into_iter().peekable();
        self.view = terms
            .iter()
            .enumerate()
            .filter_map(|(i, t)| {
                let hit = wanted.peek().is_some_and(|v| std::ptr::eq(*v, t));
                if hit {
                    wanted.next();
                    Some(i)
                } else {
                    None
                }
            })
            .collect();
        tracing::debug!(visible = self.view.len(), total = terms.len(), "browser: view recomputed");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"terms":[
                {"term":"Binomial","domain":"Algebra","definition":"A polynomial with two terms"},
                {"term":"Acute Angle","domain":"Geometry","definition":"An angle less than 90 degrees","examples":["30°"]},
                {"term":"Right Angle","domain":"Geometry","definition":"Exactly 90 degrees"}
            ]}"#
            .as_bytes(),
            "test",
        )
        .unwrap()
    }

    fn visible_names(b: &Browser) -> Vec<&str> {
        b.view().map(|t| t.term.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let b = Browser::new(catalog());
        assert_eq!(visible_names(&b), vec!["Acute Angle", "Binomial", "Right Angle"]);
        assert_eq!(b.summary(), "3 math terms");
        assert_eq!(b.domains(), ["Algebra", "Geometry"]);
    }

    #[test]
    fn search_and_domain_combine() {
        let mut b = Browser::new(catalog());
        b.set_search("Angle ");
        assert_eq!(visible_names(&b), vec!["Acute Angle", "Right Angle"]);
        b.select_domain(DomainFilter::specific("Algebra"));
        assert!(visible_names(&b).is_empty());
        assert_eq!(b.summary(), "Showing 0 of 3 terms");
        b.set_search("");
        assert_eq!(visible_names(&b), vec!["Binomial"]);
        assert_eq!(b.summary(), "Showing 1 of 3 terms");
    }

    #[test]
    fn reset_restores_full_view() {
        let mut b = Browser::new(catalog());
        b.set_search("xyz");
        b.select_domain(DomainFilter::specific("Geometry"));
        b.reset();
        assert_eq!(b.visible_len(), 3);
        assert!(!b.state().is_active());
    }

    #[test]
    fn resolve_domain_prefers_exact_label() {
        let catalog = Catalog::from_json(
            br#"{"terms":[
                {"term":"Slope","domain":"Algebra","definition":"Rise over run"},
                {"term":"Slope Field","domain":"algebra","definition":"Tangent segments on a grid"}
            ]}"#,
            "test",
        )
        .unwrap();
        let b = Browser::new(catalog);
        assert_eq!(b.resolve_domain("algebra"), Some("algebra"));
        assert_eq!(b.resolve_domain("Algebra"), Some("Algebra"));
        assert_eq!(b.resolve_domain(" ALGEBRA "), Some("Algebra"));
        assert_eq!(b.resolve_domain("Calculus"), None);
    }

    #[test]
    fn visible_indexes_into_view() {
        let mut b = Browser::new(catalog());
        b.select_domain(DomainFilter::specific("Geometry"));
        assert_eq!(b.visible(1).map(|t| t.term.as_str()), Some("Right Angle"));
        assert!(b.visible(2).is_none());
    }
}
