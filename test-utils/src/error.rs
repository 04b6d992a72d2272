use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to bind the local search API stub.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
