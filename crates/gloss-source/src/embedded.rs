//! The glossary shipped inside the binary, so gloss works with no files on disk.

const DOCUMENT: &str = include_str!("../data/glossary.json");

/// Raw bytes of the embedded catalog document.
pub fn document() -> &'static [u8] {
    DOCUMENT.as_bytes()
}
