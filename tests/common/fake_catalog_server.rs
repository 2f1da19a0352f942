//! Fake catalog server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /data/glossary.json` — the configured document with the configured
//!   status code
//! - anything else — 404
//!
//! # Example
//!
//! ```rust,no_run
//! let server = FakeCatalogServer::start(document).await.unwrap();
//! let source: CatalogSource = server.catalog_url().parse().unwrap();
//! ```

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

struct ServerState {
    status: StatusCode,
    body: Vec<u8>,
    hits: usize,
}

/// Handle to the running fake catalog server.
pub struct FakeCatalogServer {
    addr: SocketAddr,
    state: Arc<Mutex<ServerState>>,
}

impl FakeCatalogServer {
    /// Start serving `body` with status 200. Returns once the server is
    /// listening.
    pub async fn start(body: impl Into<Vec<u8>>) -> std::io::Result<Self> {
        Self::start_with_status(StatusCode::OK, body).await
    }

    pub async fn start_with_status(
        status: StatusCode,
        body: impl Into<Vec<u8>>,
    ) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ServerState {
            status,
            body: body.into(),
            hits: 0,
        }));

        let app = Router::new()
            .route("/data/glossary.json", get(serve_catalog))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the server (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/data/glossary.json", self.base_url())
    }

    /// Number of catalog requests served so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

async fn serve_catalog(State(state): State<Arc<Mutex<ServerState>>>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.hits += 1;
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
