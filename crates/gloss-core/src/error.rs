//! The one error a glossary session can hit: the catalog could not be loaded.

use thiserror::Error;

/// Raised when the catalog source is unreachable or returns malformed content.
///
/// Every variant carries `origin`, a human-readable name of the source
/// (`"embedded"`, a path, or a URL), so the message shown to the user says
/// where the load was attempted.
#[derive(Debug, Error)]
pub enum DataLoadFailure {
    #[error("cannot read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot reach {origin}: {reason}")]
    Unreachable { origin: String, reason: String },

    #[error("{origin} answered with HTTP status {status}")]
    Status { origin: String, status: u16 },

    #[error("malformed catalog in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid term #{index} in {origin}: {reason}")]
    InvalidTerm {
        origin: String,
        index: usize,
        reason: String,
    },
}
