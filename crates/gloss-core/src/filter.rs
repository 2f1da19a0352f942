//! Filter engine — pure functions from (terms, filter state) to a view.
//!
//! Nothing here allocates state between calls. Callers re-run [`filter`]
//! after every change to the [`FilterState`].

use crate::types::{FilterState, Term};
use std::collections::BTreeSet;

/// Terms admitted by both the domain and the search predicate, in input order.
///
/// The search predicate only applies when the state carries search text; it is
/// a case-insensitive substring test against the name, the definition and each
/// example.
pub fn filter<'a, I>(terms: I, state: &FilterState) -> Vec<&'a Term>
where
    I: IntoIterator<Item = &'a Term>,
{
    let needle = state.search();
    terms
        .into_iter()
        .filter(|t| state.domain.admits(t))
        .filter(|t| needle.is_empty() || t.mentions(needle))
        .collect()
}

/// Distinct domain labels, sorted ascending and compared exactly as stored.
pub fn distinct_domains<'a, I>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Term>,
{
    terms
        .into_iter()
        .map(|t| t.domain.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Human-readable result count for the status line.
pub fn summary(filtered: usize, total: usize, state: &FilterState) -> String {
    if state.is_active() {
        format!("Showing {filtered} of {total} terms")
    } else {
        format!("{total} math terms")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DomainFilter;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn term(name: &str, domain: &str, definition: &str, examples: &[&str]) -> Term {
        Term {
            term: name.to_string(),
            domain: domain.to_string(),
            definition: definition.to_string(),
            examples: examples.iter().map(|s| s.to_string()).collect(),
            visual: String::new(),
        }
    }

    fn two_terms() -> Vec<Term> {
        vec![
            term("Acute Angle", "Geometry", "An angle less than 90 degrees", &["30°"]),
            term("Binomial", "Algebra", "A polynomial with two terms", &[]),
        ]
    }

    fn names(view: &[&Term]) -> Vec<String> {
        view.iter().map(|t| t.term.clone()).collect()
    }

    #[rstest]
    #[case(DomainFilter::All, "angle", &["Acute Angle"])]
    #[case(DomainFilter::specific("Algebra"), "", &["Binomial"])]
    #[case(DomainFilter::All, "xyz", &[])]
    #[case(DomainFilter::All, "", &["Acute Angle", "Binomial"])]
    #[case(DomainFilter::All, "POLYNOMIAL", &["Binomial"])]
    #[case(DomainFilter::All, "30°", &["Acute Angle"])]
    #[case(DomainFilter::specific("Geometry"), "polynomial", &[])]
    #[case(DomainFilter::specific("Calculus"), "", &[])]
    fn scenarios(#[case] domain: DomainFilter, #[case] search: &str, #[case] expected: &[&str]) {
        let catalog = two_terms();
        let state = FilterState::new(domain, search);
        assert_eq!(names(&filter(&catalog, &state)), expected);
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        let state = FilterState::new(DomainFilter::All, "angle");
        assert!(filter(&Vec::<Term>::new(), &state).is_empty());
    }

    #[test]
    fn domains_are_distinct_and_sorted() {
        let terms = vec![
            term("Mean", "Statistics", "", &[]),
            term("Area", "Geometry", "", &[]),
            term("Median", "Statistics", "", &[]),
            term("Slope", "Algebra", "", &[]),
            term("slope field", "algebra", "", &[]),
        ];
        assert_eq!(
            distinct_domains(&terms),
            vec!["Algebra", "Geometry", "Statistics", "algebra"]
        );
    }

    #[rstest]
    #[case(DomainFilter::All, "angle", 1, 2, "Showing 1 of 2 terms")]
    #[case(DomainFilter::specific("Algebra"), "", 1, 2, "Showing 1 of 2 terms")]
    #[case(DomainFilter::All, "", 2, 2, "2 math terms")]
    #[case(DomainFilter::All, "   ", 2, 2, "2 math terms")]
    fn summary_text(
        #[case] domain: DomainFilter,
        #[case] search: &str,
        #[case] filtered: usize,
        #[case] total: usize,
        #[case] expected: &str,
    ) {
        let state = FilterState::new(domain, search);
        assert_eq!(summary(filtered, total, &state), expected);
    }

    // ── Properties ─────────────────────────────────────────────────────────

    fn arb_term() -> impl Strategy<Value = Term> {
        (
            "[A-Za-z]{1,8}",
            prop::sample::select(vec!["Algebra", "Geometry", "Statistics"]),
            "[a-z ]{0,20}",
            prop::collection::vec("[a-z0-9]{0,6}", 0..3),
        )
            .prop_map(|(name, domain, definition, examples)| Term {
                term: name,
                domain: domain.to_string(),
                definition,
                examples,
                visual: String::new(),
            })
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        (
            prop::option::of(prop::sample::select(vec!["Algebra", "Geometry", "Statistics"])),
            "[a-zA-Z ]{0,3}",
        )
            .prop_map(|(domain, search)| {
                let domain = domain.map_or(DomainFilter::All, DomainFilter::specific);
                FilterState::new(domain, &search)
            })
    }

    proptest! {
        #[test]
        fn view_is_ordered_subsequence(
            terms in prop::collection::vec(arb_term(), 0..30),
            state in arb_state(),
        ) {
            let view = filter(&terms, &state);
            let mut rest = terms.iter();
            for t in &view {
                prop_assert!(rest.any(|c| std::ptr::eq(c, *t)));
            }
        }

        #[test]
        fn inactive_state_returns_everything(terms in prop::collection::vec(arb_term(), 0..30)) {
            let view = filter(&terms, &FilterState::default());
            prop_assert_eq!(view.len(), terms.len());
        }

        #[test]
        fn every_result_satisfies_both_predicates(
            terms in prop::collection::vec(arb_term(), 0..30),
            state in arb_state(),
        ) {
            for t in filter(&terms, &state) {
                if let DomainFilter::Specific(label) = &state.domain {
                    prop_assert_eq!(&t.domain, label);
                }
                if !state.search().is_empty() {
                    let needle = state.search();
                    prop_assert!(
                        t.term.to_lowercase().contains(needle)
                            || t.definition.to_lowercase().contains(needle)
                            || t.examples.iter().any(|e| e.to_lowercase().contains(needle))
                    );
                }
            }
        }

        #[test]
        fn filtering_is_idempotent(
            terms in prop::collection::vec(arb_term(), 0..30),
            state in arb_state(),
        ) {
            let once = filter(&terms, &state);
            let twice = filter(once.iter().copied(), &state);
            prop_assert_eq!(once, twice);
        }
    }
}
