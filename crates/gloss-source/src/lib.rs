//! gloss-source — catalog source adapters for gloss.
//!
//! Each source knows how to fetch the raw `{ "terms": [...] }` document. The
//! fetch is the only asynchronous step in a glossary session: callers
//! `block_on` [`CatalogSource::load`] once at startup and never touch the
//! source again.

pub mod embedded;
pub mod file;
pub mod http;

use gloss_core::{Catalog, DataLoadFailure};
use hyper::Uri;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a source *specification* (as opposed to the load itself).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceSpecError {
    #[error("empty catalog source")]
    Empty,
    #[error("invalid catalog URL {0:?}")]
    InvalidUrl(String),
    #[error("unsupported URL scheme {0:?} (only http:// is supported)")]
    UnsupportedScheme(String),
}

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The glossary compiled into the binary.
    Embedded,
    File(PathBuf),
    Http(Uri),
}

impl CatalogSource {
    /// Name of the source as shown in log lines and error messages.
    pub fn origin(&self) -> String {
        match self {
            CatalogSource::Embedded => "embedded catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Http(uri) => uri.to_string(),
        }
    }

    /// Fetch the raw document bytes.
    pub async fn fetch(&self) -> Result<Vec<u8>, DataLoadFailure> {
        match self {
            CatalogSource::Embedded => Ok(embedded::document().to_vec()),
            CatalogSource::File(path) => file::fetch(path).await,
            CatalogSource::Http(uri) => http::fetch(uri).await,
        }
    }

    /// Fetch and parse the catalog.
    pub async fn load(&self) -> Result<Catalog, DataLoadFailure> {
        let origin = self.origin();
        let bytes = self.fetch().await?;
        let catalog = Catalog::from_json(&bytes, &origin)?;
        tracing::info!(origin = %origin, terms = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl std::str::FromStr for CatalogSource {
    type Err = SourceSpecError;

    /// `embedded`, an `http://` URL, or anything else as a filesystem path.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(SourceSpecError::Empty);
        }
        if spec.eq_ignore_ascii_case("embedded") {
            return Ok(CatalogSource::Embedded);
        }
        if let Some((scheme, _)) = spec.split_once("://") {
            return match scheme.to_ascii_lowercase().as_str() {
                "http" => spec
                    .parse::<Uri>()
                    .map(CatalogSource::Http)
                    .map_err(|_| SourceSpecError::InvalidUrl(spec.to_string())),
                other => Err(SourceSpecError::UnsupportedScheme(other.to_string())),
            };
        }
        Ok(CatalogSource::File(PathBuf::from(spec)))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(uri) => write!(f, "{uri}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
