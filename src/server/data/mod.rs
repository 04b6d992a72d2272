//! Data access layer for the catalog store and the remote search API.
//!
//! This module contains the two gateways the application talks to. `BookRepository`
//! performs all queries against the `books` table using SeaORM entity models, and
//! `BookSearchApi` issues requests to the remote book search endpoint. Both return raw
//! entity or DTO shapes; conversion into domain models happens in the service layer.

pub mod book;
pub mod book_search;

#[cfg(test)]
mod test;
