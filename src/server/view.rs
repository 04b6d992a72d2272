//! Server-rendered pages.
//!
//! Each page is an askama template compiled from `templates/`. Handlers build one of
//! these structs and pass it to [`render`]; the error page is rendered by
//! `AppError::into_response`.

use askama::Template;
use axum::response::Html;

use crate::server::{
    error::AppError,
    model::book::{Book, NewBook},
};

/// List of every book in the catalog.
#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexPage {
    pub books: Vec<Book>,
}

/// Detail and edit view of a single book.
///
/// Holds zero or one book; an empty list renders a "no such book" notice.
#[derive(Template)]
#[template(path = "pages/details.html")]
pub struct DetailsPage {
    pub books: Vec<Book>,
}

/// Empty search form.
#[derive(Template)]
#[template(path = "pages/searches/new.html")]
pub struct NewSearchPage;

/// Results of a remote search, each with a form to save it to the catalog.
#[derive(Template)]
#[template(path = "pages/searches/show.html")]
pub struct SearchResultsPage {
    pub books: Vec<NewBook>,
}

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorPage {
    pub error_message: String,
}

/// Renders a page to an HTML response body.
///
/// # Arguments
/// - `page` - Template to render
///
/// # Returns
/// - `Ok(Html<String>)` - Rendered page
/// - `Err(AppError::TemplateErr)` - Template failed to render
pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
