use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        book::{create_book, get_book, get_books, update_book},
        page::{not_found, test_page},
        search::{create_search, new_search},
    },
    middleware::method_override::method_override,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_books))
        .route("/test", get(test_page))
        .route("/searches/new", get(new_search))
        .route("/searches", post(create_search))
        .route("/books", post(create_book))
        .route("/books/{id}", get(get_book))
        .route("/update/{id}", put(update_book))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Builds the complete application.
///
/// Layers added with `Router::layer` run after a route has been matched, so the method
/// override wraps an outer router whose only job is to hand every request to the
/// routing table.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Application ready to be passed to `axum::serve`
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback_service(router().with_state(state))
        .layer(middleware::map_request(method_override))
        .layer(TraceLayer::new_for_http())
}
