//! Static catalogs used across harnesses.

use super::builders::TermBuilder;
use gloss_core::Term;

/// The two-term catalog used by the filter scenarios.
pub fn scenario_terms() -> Vec<Term> {
    vec![
        TermBuilder::new("Acute Angle", "Geometry")
            .definition("An angle less than 90 degrees")
            .example("30°")
            .build(),
        TermBuilder::new("Binomial", "Algebra")
            .definition("A polynomial with two terms")
            .build(),
    ]
}

/// A small catalog spread over three domains, given out of order.
pub fn classroom_terms() -> Vec<Term> {
    vec![
        TermBuilder::new("Slope", "Algebra")
            .definition("The steepness of a line, rise over run")
            .example("y = 2x + 1 has slope 2")
            .build(),
        TermBuilder::new("Right Angle", "Geometry")
            .definition("An angle of exactly 90 degrees")
            .visual("<svg viewBox=\"0 0 10 10\"></svg>")
            .build(),
        TermBuilder::new("Mean", "Statistics & Probability")
            .definition("The sum of the values divided by how many there are")
            .example("The mean of 2, 4 and 6 is 4")
            .build(),
        TermBuilder::new("Acute Angle", "Geometry")
            .definition("An angle less than 90 degrees")
            .example("30°")
            .example("45°")
            .build(),
        TermBuilder::new("Variable", "Algebra")
            .definition("A letter standing for an unknown number")
            .build(),
    ]
}

/// An older-style document: `svg` instead of `visual`, and no `examples` on
/// some entries.
pub const LEGACY_DOCUMENT: &str = r#"{
  "terms": [
    {
      "term": "Obtuse Angle",
      "domain": "Geometry",
      "definition": "An angle greater than 90 degrees and less than 180 degrees",
      "examples": ["120°"],
      "svg": "<svg viewBox=\"0 0 100 100\"><line x1=\"10\" y1=\"90\" x2=\"90\" y2=\"90\"/></svg>"
    },
    {
      "term": "Coefficient",
      "domain": "Algebra",
      "definition": "A number multiplied by a variable"
    }
  ]
}"#;

pub const MALFORMED_DOCUMENT: &str = r#"{ "terms": [ { "term": "Slope", "#;

/// `n` distinct terms cycling through five domains, for properties and
/// benchmarks.
pub fn synthetic_terms(n: usize) -> Vec<Term> {
    const DOMAINS: &[&str] = &[
        "Algebra",
        "Geometry",
        "Number Sense",
        "Ratios & Proportions",
        "Statistics & Probability",
    ];
    (0..n)
        .map(|i| {
            TermBuilder::new(format!("Term {i:05}"), DOMAINS[i % DOMAINS.len()])
                .definition(format!("Synthetic definition number {i} about angles and ratios"))
                .example(format!("example {}", i * 7))
                .build()
        })
        .collect()
}
