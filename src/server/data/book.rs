use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::book::{CreateBookParams, UpdateBookParams};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every book in store order
    pub async fn get_all(&self) -> Result<Vec<entity::book::Model>, DbErr> {
        entity::prelude::Book::find().all(self.db).await
    }

    /// Gets a book by ID, returning `None` when no row has that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(id).one(self.db).await
    }

    /// Inserts a new book and returns its store-assigned ID
    ///
    /// `bookshelf` is left unset so the column default applies.
    pub async fn create(&self, params: CreateBookParams) -> Result<i32, DbErr> {
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            authors: ActiveValue::Set(params.authors),
            isbn: ActiveValue::Set(params.isbn),
            imageurl: ActiveValue::Set(params.imageurl),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        };

        let result = entity::prelude::Book::insert(book).exec(self.db).await?;

        Ok(result.last_insert_id)
    }

    /// Overwrites the editable fields of the book with the given ID
    ///
    /// Updating an ID with no matching row affects nothing and is not an error.
    pub async fn update(&self, params: UpdateBookParams) -> Result<(), DbErr> {
        entity::prelude::Book::update_many()
            .set(entity::book::ActiveModel {
                title: ActiveValue::Set(params.title),
                authors: ActiveValue::Set(params.authors),
                isbn: ActiveValue::Set(params.isbn),
                imageurl: ActiveValue::Set(params.imageurl),
                description: ActiveValue::Set(params.description),
                bookshelf: ActiveValue::Set(params.bookshelf),
                ..Default::default()
            })
            .filter(entity::book::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
