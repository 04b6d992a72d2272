use crate::server::{
    data::book_search::{BookSearchApi, MAX_RESULTS},
    error::search::SearchError,
    model::search::{SearchMode, SearchParams},
};
use axum::http::StatusCode;
use test_utils::{
    error::TestError,
    fixture,
    search_api::{self, SearchApiStub},
};

mod search;

fn params(text: &str, mode: SearchMode) -> SearchParams {
    SearchParams {
        text: text.to_string(),
        mode,
    }
}
