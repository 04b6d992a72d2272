//! Search API payload fixtures.
//!
//! Builds JSON bodies shaped like the remote volumes endpoint so tests can feed them to
//! the [`SearchApiStub`](crate::search_api::SearchApiStub) or deserialize them directly.

use serde_json::{json, Value};

/// Title of the volume returned by [`hobbit`].
pub const HOBBIT_TITLE: &str = "The Hobbit";

/// Wraps volume items into a search response body.
pub fn response(items: Vec<Value>) -> Value {
    json!({
        "kind": "books#volumes",
        "totalItems": items.len(),
        "items": items,
    })
}

/// A response body with no `items` key, which is how the API reports zero matches.
pub fn empty_response() -> Value {
    json!({
        "kind": "books#volumes",
        "totalItems": 0,
    })
}

/// Wraps a `volumeInfo` object into a volume item.
pub fn item(volume_info: Value) -> Value {
    json!({
        "kind": "books#volume",
        "volumeInfo": volume_info,
    })
}

/// A fully populated volume whose thumbnail still uses the `http:` scheme.
pub fn hobbit() -> Value {
    item(json!({
        "title": HOBBIT_TITLE,
        "authors": ["J. R. R. Tolkien"],
        "description": "A hobbit is swept into a quest for dragon gold.",
        "industryIdentifiers": [
            { "type": "ISBN_13", "identifier": "9780547928227" },
            { "type": "ISBN_10", "identifier": "054792822X" }
        ],
        "imageLinks": {
            "smallThumbnail": "http://books.google.com/books/content?id=pD6arNyKyi8C&zoom=5",
            "thumbnail": "http://books.google.com/books/content?id=pD6arNyKyi8C&zoom=1"
        }
    }))
}

/// A volume carrying nothing but an empty `volumeInfo`.
pub fn bare() -> Value {
    item(json!({}))
}
