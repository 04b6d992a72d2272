//! Bookshelf Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bookshelf
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, fixtures and factories for book rows, and a local stand-in for the remote
//! book search API.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **SearchApiStub**: Local HTTP server answering like the book search API
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Book;
//!
//! #[tokio::test]
//! async fn test_book_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Book)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod search_api;
