//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into rendered error pages. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`,
//! so handlers can propagate any failure with `?` and still answer with HTML.

pub mod config;
pub mod search;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{config::ConfigError, search::SearchError},
    view::ErrorPage,
};

/// Message shown for failures that have no more specific wording.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message shown when the remote search API fails.
pub const SEARCH_ERROR_MESSAGE: &str = "Could not retrieve book results";

/// Message shown when the catalog store fails.
pub const STORE_ERROR_MESSAGE: &str = "Could not retrieve book records";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Remote book search failure.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    SearchErr(#[from] SearchError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Template rendering error from askama.
    #[error(transparent)]
    TemplateErr(#[from] askama::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into rendered error pages.
///
/// Maps each error variant to an appropriate HTTP status code and a human-readable
/// message. Server-side failures are logged with full details while the page only
/// carries the generic message, to avoid leaking implementation details.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_page(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_page(StatusCode::BAD_REQUEST, msg),
            Self::SearchErr(err) => {
                tracing::error!("Book search failed: {}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, SEARCH_ERROR_MESSAGE)
            }
            Self::DbErr(err) => {
                tracing::error!("Catalog store query failed: {}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, STORE_ERROR_MESSAGE)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders the error view with the given status and message.
///
/// Falls back to a plain text body if the error template itself fails to render, so an
/// error response is always produced.
///
/// # Arguments
/// - `status` - HTTP status of the response
/// - `message` - Human-readable message shown on the page
///
/// # Returns
/// - `Response` - HTML error page, or plain text fallback
pub fn error_page(status: StatusCode, message: impl Into<String>) -> Response {
    let page = ErrorPage {
        error_message: message.into(),
    };

    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {}", err);
            (status, page.error_message).into_response()
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and renders the error page with a generic message to avoid
/// exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_page(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}
