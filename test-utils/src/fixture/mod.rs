//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let book = fixture::book::entity();
//!
//! // Create with custom fields
//! let shelved = fixture::book::entity_builder()
//!     .bookshelf("Fantasy")
//!     .build();
//! ```

pub mod book;
pub mod volume;

pub use book::{entity as book_entity, entity_builder as book_entity_builder};
