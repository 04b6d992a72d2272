use reqwest::StatusCode;
use thiserror::Error;

/// Failure while querying the remote book search API.
///
/// Both variants surface to the user as the same generic "could not retrieve book
/// results" page; the detail is only logged.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or the response body could not be decoded.
    #[error("Book search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Book search API responded with status {0}")]
    Status(StatusCode),
}
