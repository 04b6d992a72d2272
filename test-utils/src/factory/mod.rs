//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity
//! has its own factory module with both a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let book = factory::book::create_book(&db).await?;
//!
//!     // Customize
//!     let shelved = factory::book::BookFactory::new(&db)
//!         .title("Dune")
//!         .bookshelf("Science Fiction")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod book;
pub mod helpers;

pub use book::create_book;
