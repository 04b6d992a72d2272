//! Book domain models and parameters.
//!
//! Provides the persisted `Book` model, the transient `NewBook` produced from search
//! results, and parameter types for insert and update operations. Conversions from
//! entity models, form DTOs, and search API payloads happen here so the layers above
//! never touch those shapes directly.

use crate::model::{
    book::{CreateBookDto, UpdateBookDto},
    volume::VolumeInfoDto,
};

/// Title used when a search result carries none.
pub const PLACEHOLDER_TITLE: &str = "No title for you.";

/// Authors used when a search result carries none.
pub const PLACEHOLDER_AUTHORS: &str = "Author not found";

/// Local cover image used when a search result carries no thumbnail.
pub const DEFAULT_IMAGE_URL: &str = "/images/default.jpg";

/// Separator between author names in the stored `authors` column.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// A book persisted in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned primary key.
    pub id: i32,
    pub title: String,
    /// Author names joined with `", "`.
    pub authors: String,
    pub isbn: String,
    pub imageurl: String,
    pub description: String,
    /// Free text category label, empty until set through an update.
    pub bookshelf: String,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The book entity from the database
    ///
    /// # Returns
    /// - `Book` - The converted domain model
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            authors: entity.authors,
            isbn: entity.isbn,
            imageurl: entity.imageurl,
            description: entity.description,
            bookshelf: entity.bookshelf,
        }
    }
}

/// A book built from a search result that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub authors: String,
    pub isbn: String,
    pub imageurl: String,
    pub description: String,
    pub bookshelf: String,
}

impl NewBook {
    /// Maps a search API volume onto the catalog's book shape.
    ///
    /// Each field is defaulted independently:
    /// - `title` falls back to [`PLACEHOLDER_TITLE`]
    /// - `authors` are joined with `", "`, or [`PLACEHOLDER_AUTHORS`] when absent or empty
    /// - `imageurl` is the thumbnail, or [`DEFAULT_IMAGE_URL`]; an `http:` scheme is
    ///   upgraded to `https:`
    /// - `isbn` is the first industry identifier, or empty when there is none
    /// - `description` falls back to empty
    /// - `bookshelf` is always empty
    ///
    /// # Arguments
    /// - `info` - The `volumeInfo` object of one search result
    ///
    /// # Returns
    /// - `NewBook` - Transient book ready to be shown or submitted for insert
    pub fn from_volume_info(info: VolumeInfoDto) -> Self {
        let title = info
            .title
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

        let authors = match info.authors {
            Some(authors) if !authors.is_empty() => authors.join(AUTHOR_SEPARATOR),
            _ => PLACEHOLDER_AUTHORS.to_string(),
        };

        let imageurl = info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        let isbn = info
            .industry_identifiers
            .and_then(|identifiers| identifiers.into_iter().next())
            .map(|identifier| identifier.identifier)
            .unwrap_or_default();

        Self {
            title,
            authors,
            isbn,
            imageurl: upgrade_to_https(imageurl),
            description: info.description.unwrap_or_default(),
            bookshelf: String::new(),
        }
    }
}

/// Rewrites a leading `http:` scheme to `https:`, leaving the remainder untouched.
fn upgrade_to_https(url: String) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{}", rest),
        None => url,
    }
}

/// Parameters for inserting a book. `bookshelf` is left to the store default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookParams {
    pub title: String,
    pub authors: String,
    pub isbn: String,
    pub imageurl: String,
    pub description: String,
}

impl CreateBookParams {
    /// Converts the submitted form to insert parameters.
    pub fn from_dto(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            authors: dto.authors,
            isbn: dto.isbn,
            imageurl: dto.imageurl,
            description: dto.description,
        }
    }
}

/// Parameters for overwriting the editable fields of a stored book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookParams {
    pub id: i32,
    pub title: String,
    pub authors: String,
    pub isbn: String,
    pub imageurl: String,
    pub description: String,
    pub bookshelf: String,
}

impl UpdateBookParams {
    /// Converts the submitted form to update parameters for the book `id`.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to overwrite, taken from the request path
    /// - `dto` - Submitted form body
    pub fn from_dto(id: i32, dto: UpdateBookDto) -> Self {
        Self {
            id,
            title: dto.title,
            authors: dto.authors,
            isbn: dto.isbn,
            imageurl: dto.imageurl,
            description: dto.description,
            bookshelf: dto.bookshelf,
        }
    }
}
