use axum::{extract::State, response::Html, Form};

use crate::server::{
    error::AppError,
    model::search::SearchParams,
    service::search::BookSearchService,
    state::AppState,
    view::{self, NewSearchPage, SearchResultsPage},
};

/// Show the empty search form.
pub async fn new_search() -> Result<Html<String>, AppError> {
    view::render(&NewSearchPage)
}

/// Run a search against the remote book API.
///
/// The form posts `search` twice: once with the text and once with the `title` or
/// `author` flag from the radio buttons. It is extracted as raw pairs so both values
/// survive.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and search URL
/// - `pairs` - Submitted form fields in order
///
/// # Returns
/// - `200 OK` - Results page, one entry per returned volume
/// - `400 Bad Request` - No search text submitted
/// - `500 Internal Server Error` - Search API unreachable, failing or undecodable
pub async fn create_search(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let params = SearchParams::from_form(pairs)
        .ok_or_else(|| AppError::BadRequest("Search text is required".to_string()))?;

    let service = BookSearchService::new(&state.http_client, &state.book_search_url);

    let books = service.search(params).await?;

    view::render(&SearchResultsPage { books })
}
