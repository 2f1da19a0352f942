//! File source — reads a catalog document from the local filesystem.

use gloss_core::DataLoadFailure;
use std::path::Path;

pub async fn fetch(path: &Path) -> Result<Vec<u8>, DataLoadFailure> {
    tracing::debug!(path = %path.display(), "reading catalog file");
    tokio::fs::read(path)
        .await
        .map_err(|source| DataLoadFailure::Io {
            origin: path.display().to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
