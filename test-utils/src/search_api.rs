//! Local stand-in for the remote book search API.
//!
//! Serves a canned response from an axum server bound to an ephemeral localhost port and
//! records the query parameters of every request it receives, so tests can assert both
//! how the application calls the API and how it handles the reply.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::{fixture, search_api::SearchApiStub};
//!
//! let stub = SearchApiStub::respond_with(fixture::volume::response(vec![
//!     fixture::volume::hobbit(),
//! ]))
//! .await?;
//!
//! // Point the application at `stub.url()` and issue a search...
//!
//! assert_eq!(stub.requests()[0]["q"], "intitle:Hobbit");
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

use crate::error::TestError;

/// Path the stub serves volumes on, mirroring the real endpoint.
pub const VOLUMES_PATH: &str = "/books/v1/volumes";

type RecordedRequests = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(StatusCode),
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    requests: RecordedRequests,
}

/// Running search API stub.
///
/// The server task lives on the test's runtime and stops when the runtime shuts down.
pub struct SearchApiStub {
    url: String,
    requests: RecordedRequests,
}

impl SearchApiStub {
    /// Starts a stub that answers every request with `200 OK` and the given JSON body.
    ///
    /// # Arguments
    /// - `body` - JSON body to return, typically built with `fixture::volume`
    ///
    /// # Returns
    /// - `Ok(SearchApiStub)` - Running stub
    /// - `Err(TestError::Io)` - Failed to bind a local port
    pub async fn respond_with(body: Value) -> Result<Self, TestError> {
        Self::start(Reply::Json(body)).await
    }

    /// Starts a stub that answers every request with the given status and no body.
    ///
    /// # Arguments
    /// - `status` - Non-success status the API should respond with
    ///
    /// # Returns
    /// - `Ok(SearchApiStub)` - Running stub
    /// - `Err(TestError::Io)` - Failed to bind a local port
    pub async fn fail_with(status: StatusCode) -> Result<Self, TestError> {
        Self::start(Reply::Status(status)).await
    }

    async fn start(reply: Reply) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = RecordedRequests::default();

        let router = Router::new()
            .route(VOLUMES_PATH, get(volumes))
            .with_state(StubState {
                reply,
                requests: requests.clone(),
            });

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            url: format!("http://{}{}", addr, VOLUMES_PATH),
            requests,
        })
    }

    /// Full URL of the stubbed volumes endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

/// Returns a URL on a localhost port that nothing is listening on.
///
/// Binds an ephemeral port and immediately releases it, so connections are refused.
///
/// # Returns
/// - `Ok(String)` - URL that fails to connect
/// - `Err(TestError::Io)` - Failed to bind a local port
pub async fn unreachable_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}{}", addr, VOLUMES_PATH))
}

async fn volumes(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(params);
    }

    match state.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(status) => status.into_response(),
    }
}
