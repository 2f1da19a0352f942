//! HTTP source — fetches a catalog document over plain HTTP.
//!
//! Uses the hyper-util legacy client with the plain `HttpConnector`; TLS is
//! not supported, so only `http://` URLs reach this module. Any non-2xx status
//! is a load failure, as is a transport error or a stalled server.

use gloss_core::DataLoadFailure;
use http_body_util::{BodyExt, Empty};
use hyper::{body::Bytes, Uri};
use hyper_util::{client::legacy::Client, rt::TokioExecutor};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn fetch(uri: &Uri) -> Result<Vec<u8>, DataLoadFailure> {
    let origin = uri.to_string();
    tracing::debug!(uri = %origin, "fetching catalog over http");

    match tokio::time::timeout(FETCH_TIMEOUT, get(uri, &origin)).await {
        Ok(result) => result,
        Err(_) => Err(DataLoadFailure::Unreachable {
            origin,
            reason: format!("no response within {}s", FETCH_TIMEOUT.as_secs()),
        }),
    }
}

async fn get(uri: &Uri, origin: &str) -> Result<Vec<u8>, DataLoadFailure> {
    let unreachable = |err: &dyn std::error::Error| DataLoadFailure::Unreachable {
        origin: origin.to_string(),
        reason: describe(err),
    };

    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build_http();
    let response = client.get(uri.clone()).await.map_err(|e| unreachable(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataLoadFailure::Status {
            origin: origin.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| unreachable(&e))?
        .to_bytes();
    tracing::debug!(bytes = body.len(), "catalog body received");
    Ok(body.to_vec())
}

/// Flatten an error and its sources into one line: hyper's top-level client
/// error alone ("client error (Connect)") hides the useful part.
fn describe(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        cause = inner.source();
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        // Grab a free port, then close it so nothing is listening.
        let port = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let uri: Uri = format!("http://127.0.0.1:{port}/glossary.json").parse().unwrap();

        let err = fetch(&uri).await.unwrap_err();
        assert!(matches!(err, DataLoadFailure::Unreachable { .. }), "got {err:?}");
        assert!(err.to_string().contains(&port.to_string()));
    }

    #[test]
    fn describe_walks_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = DataLoadFailure::Io {
            origin: "x".to_string(),
            source: inner,
        };
        assert_eq!(describe(&outer), "cannot read x: refused: refused");
    }
}
