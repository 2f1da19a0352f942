//! Headless printer — `gloss --headless`.
//!
//! Applies the CLI's domain and query to a [`Browser`] and writes either the
//! summary plus the visible terms, or the distinct domains, in text or JSON.

use clap::ValueEnum;
use gloss_core::{Browser, DomainFilter, Term};
use serde::Serialize;
use std::io::Write;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Filter requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Domain label, or `all`. An exact catalog label wins over a
    /// case-insensitive one.
    pub domain: Option<String>,
    pub search: Option<String>,
}

impl Query {
    /// Apply to `browser`. A label the catalog does not contain is kept
    /// verbatim and simply matches nothing.
    pub fn apply(&self, browser: &mut Browser) {
        if let Some(label) = self.domain.as_deref() {
            let filter = if label.trim().eq_ignore_ascii_case("all") {
                DomainFilter::All
            } else {
                let known = browser.resolve_domain(label).map(str::to_string);
                if known.is_none() {
                    tracing::warn!(domain = label, "domain not in catalog");
                }
                DomainFilter::Specific(known.unwrap_or_else(|| label.to_string()))
            };
            browser.select_domain(filter);
        }
        if let Some(search) = self.search.as_deref() {
            browser.set_search(search);
        }
    }
}

#[derive(Serialize)]
struct ViewDocument<'a> {
    summary: String,
    total: usize,
    showing: usize,
    terms: Vec<&'a Term>,
}

/// Write the summary and the visible terms.
pub fn print_view<W: Write>(out: &mut W, browser: &Browser, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let doc = ViewDocument {
                summary: browser.summary(),
                total: browser.catalog().len(),
                showing: browser.visible_len(),
                terms: browser.view().collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", browser.summary())?;
            if browser.visible_len() == 0 {
                writeln!(out)?;
                writeln!(out, "No terms found")?;
                writeln!(out, "Try adjusting your search or filter")?;
            }
            for term in browser.view() {
                writeln!(out)?;
                write_term(out, term)?;
            }
        }
    }
    Ok(())
}

fn write_term<W: Write>(out: &mut W, term: &Term) -> std::io::Result<()> {
    writeln!(out, "{} [{}]", term.term, term.domain)?;
    writeln!(out, "  {}", term.definition)?;
    if !term.examples.is_empty() {
        writeln!(out, "  e.g. {}", term.examples.join("; "))?;
    }
    Ok(())
}

/// Write the catalog's distinct domains, ascending.
pub fn print_domains<W: Write>(out: &mut W, browser: &Browser, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, browser.domains())?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for domain in browser.domains() {
                writeln!(out, "{domain}")?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_core::Catalog;

    fn browser() -> Browser {
        let catalog = Catalog::from_json(
            r#"{"terms":[
                {"term":"Binomial","domain":"Algebra","definition":"A polynomial with two terms"},
                {"term":"Acute Angle","domain":"Geometry","definition":"An angle less than 90 degrees","examples":["30°","45°"]}
            ]}"#
            .as_bytes(),
            "test",
        )
        .unwrap();
        Browser::new(catalog)
    }

    fn text_of(browser: &Browser) -> String {
        let mut out = Vec::new();
        print_view(&mut out, browser, OutputFormat::Text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_summary_then_terms() {
        let b = browser();
        assert_eq!(
            text_of(&b),
            "2 math terms\n\
             \n\
             Acute Angle [Geometry]\n  An angle less than 90 degrees\n  e.g. 30°; 45°\n\
             \n\
             Binomial [Algebra]\n  A polynomial with two terms\n"
        );
    }

    #[test]
    fn domain_is_matched_case_insensitively() {
        let mut b = browser();
        Query { domain: Some("algebra".into()), search: None }.apply(&mut b);
        assert_eq!(b.state().domain, DomainFilter::specific("Algebra"));
        assert_eq!(b.visible_len(), 1);
    }

    #[test]
    fn exact_domain_label_wins_over_case_variant() {
        let catalog = Catalog::from_json(
            br#"{"terms":[
                {"term":"Slope","domain":"Algebra","definition":"Rise over run"},
                {"term":"Slope Field","domain":"algebra","definition":"Tangent segments on a grid"}
            ]}"#,
            "test",
        )
        .unwrap();
        let mut b = Browser::new(catalog);
        Query { domain: Some("algebra".into()), search: None }.apply(&mut b);
        assert_eq!(b.state().domain, DomainFilter::specific("algebra"));
        assert_eq!(b.view().map(|t| t.term.as_str()).collect::<Vec<_>>(), vec!["Slope Field"]);

        Query { domain: Some("ALGEBRA".into()), search: None }.apply(&mut b);
        assert_eq!(b.state().domain, DomainFilter::specific("Algebra"));
    }

    #[test]
    fn unknown_domain_prints_placeholder() {
        let mut b = browser();
        Query { domain: Some("Calculus".into()), search: None }.apply(&mut b);
        let text = text_of(&b);
        assert!(text.starts_with("Showing 0 of 2 terms\n"));
        assert!(text.contains("No terms found"));
    }

    #[test]
    fn json_view_carries_counts() {
        let mut b = browser();
        Query { domain: None, search: Some("angle".into()) }.apply(&mut b);
        let mut out = Vec::new();
        print_view(&mut out, &b, OutputFormat::Json).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["summary"], "Showing 1 of 2 terms");
        assert_eq!(doc["total"], 2);
        assert_eq!(doc["showing"], 1);
        assert_eq!(doc["terms"][0]["term"], "Acute Angle");
    }

    #[test]
    fn domains_listing() {
        let b = browser();
        let mut out = Vec::new();
        print_domains(&mut out, &b, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Algebra\nGeometry\n");
    }
}
