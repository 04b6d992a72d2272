//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the catalog store
//! - HTTP client for the remote book search API
//! - URL of the search endpoint

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the catalog store.
    ///
    /// Opened once at startup and shared by every request.
    pub db: DatabaseConnection,

    /// HTTP client for requests to the remote book search API.
    pub http_client: reqwest::Client,

    /// Full URL of the remote volumes search endpoint.
    pub book_search_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the search API
    /// - `book_search_url` - Search endpoint URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, book_search_url: String) -> Self {
        Self {
            db,
            http_client,
            book_search_url,
        }
    }
}
