//! HTTP request handlers.
//!
//! Handlers extract form and path input, convert it to server parameter types, call into
//! the service layer and answer with a rendered page or a redirect. Every failure is an
//! `AppError`, which renders the error page.

pub mod book;
pub mod page;
pub mod search;

#[cfg(test)]
mod test;
