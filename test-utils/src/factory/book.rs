//! Book factory for creating test book rows.
//!
//! This module provides factory methods for inserting book entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// Defaults are sourced from the book fixture, with a unique title per factory so rows
/// created in the same test are distinguishable. The primary key is left to the store.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db)
///     .title("Dune")
///     .bookshelf("Science Fiction")
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::book::Model,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BookFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::book::entity_builder()
            .title(format!("Book {}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.entity.authors = authors.into();
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.entity.isbn = isbn.into();
        self
    }

    pub fn imageurl(mut self, imageurl: impl Into<String>) -> Self {
        self.entity.imageurl = imageurl.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the bookshelf label stored on the row.
    ///
    /// # Arguments
    /// - `bookshelf` - Free text category label
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn bookshelf(mut self, bookshelf: impl Into<String>) -> Self {
        self.entity.bookshelf = bookshelf.into();
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.entity.title),
            authors: ActiveValue::Set(self.entity.authors),
            isbn: ActiveValue::Set(self.entity.isbn),
            imageurl: ActiveValue::Set(self.entity.imageurl),
            description: ActiveValue::Set(self.entity.description),
            bookshelf: ActiveValue::Set(self.entity.bookshelf),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::book::Model)` - Created book entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
