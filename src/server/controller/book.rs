use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};

use crate::{
    model::book::{CreateBookDto, UpdateBookDto},
    server::{
        error::AppError,
        model::book::{CreateBookParams, UpdateBookParams},
        service::book::BookService,
        state::AppState,
        util::parse::parse_book_id,
        view::{self, DetailsPage, IndexPage},
    },
};

/// List every book in the catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Index page listing all stored books
/// - `500 Internal Server Error` - Catalog store failure
pub async fn get_books(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let service = BookService::new(&state.db);

    let books = service.get_all().await?;

    view::render(&IndexPage { books })
}

/// Show a single book with its edit form.
///
/// An id with no stored book still renders the details page, with a notice instead of
/// the book.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Book id from the path
///
/// # Returns
/// - `200 OK` - Details page with zero or one book
/// - `400 Bad Request` - Id is not an integer
/// - `500 Internal Server Error` - Catalog store failure
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_book_id(&id)?;
    let service = BookService::new(&state.db);

    let books = service.get_by_id(id).await?.into_iter().collect();

    view::render(&DetailsPage { books })
}

/// Save a search result to the catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Book fields submitted from a search result
///
/// # Returns
/// - `303 See Other` - Redirect to the new book's details page
/// - `500 Internal Server Error` - Catalog store failure
pub async fn create_book(
    State(state): State<AppState>,
    Form(payload): Form<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookService::new(&state.db);

    let id = service.create(CreateBookParams::from_dto(payload)).await?;

    Ok(Redirect::to(&format!("/books/{}", id)))
}

/// Overwrite every editable field of a stored book.
///
/// Reached through `POST /update/{id}?_method=PUT` from the details form. Updating an id
/// with no stored book changes nothing and still redirects.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Book id from the path
/// - `payload` - Complete set of book fields
///
/// # Returns
/// - `303 See Other` - Redirect to the index page
/// - `400 Bad Request` - Id is not an integer
/// - `500 Internal Server Error` - Catalog store failure
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(payload): Form<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_book_id(&id)?;
    let service = BookService::new(&state.db);

    service.update(UpdateBookParams::from_dto(id, payload)).await?;

    Ok(Redirect::to("/"))
}
