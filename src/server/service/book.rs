use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, CreateBookParams, UpdateBookParams},
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every book in the catalog
    pub async fn get_all(&self) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        let books = repo.get_all().await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }

    /// Gets a book by ID, `None` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo.get_by_id(id).await?;

        Ok(book.map(Book::from_entity))
    }

    /// Saves a new book and returns its assigned ID
    pub async fn create(&self, params: CreateBookParams) -> Result<i32, AppError> {
        let repo = BookRepository::new(self.db);

        let id = repo.create(params).await?;

        tracing::info!("Added book {} to the catalog", id);

        Ok(id)
    }

    /// Overwrites the editable fields of a stored book
    pub async fn update(&self, params: UpdateBookParams) -> Result<(), AppError> {
        let repo = BookRepository::new(self.db);

        let id = params.id;
        repo.update(params).await?;

        tracing::info!("Updated book {}", id);

        Ok(())
    }
}
