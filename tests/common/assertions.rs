//! Domain-specific assertion macros for gloss harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! view or load result was wrong.

/// Assert the names of a view, in order.
///
/// ```rust
/// assert_view_names!(browser.view(), ["Acute Angle", "Right Angle"]);
/// ```
#[macro_export]
macro_rules! assert_view_names {
    ($view:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $view.into_iter().map(|t: &gloss_core::Term| t.term.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_view_names! failed");
    }};
}

/// Assert that every term in a view satisfies a predicate.
#[macro_export]
macro_rules! assert_all_terms {
    ($view:expr, $pred:expr) => {{
        for term in $view {
            let term: &gloss_core::Term = term;
            if !($pred)(term) {
                panic!("assert_all_terms! failed on term {:?}", term.term);
            }
        }
    }};
}

/// Assert that a load result failed with the given `DataLoadFailure` variant.
///
/// ```rust
/// assert_load_fails!(result, Status { status: 404, .. });
/// ```
#[macro_export]
macro_rules! assert_load_fails {
    ($result:expr, $($variant:tt)+) => {{
        match $result {
            Err(gloss_core::DataLoadFailure::$($variant)+) => {}
            Err(other) => panic!(
                "assert_load_fails! failed:\n  expected: {}\n  actual:   {:?}",
                stringify!($($variant)+),
                other
            ),
            Ok(_) => panic!(
                "assert_load_fails! failed: load succeeded, expected {}",
                stringify!($($variant)+)
            ),
        }
    }};
}
