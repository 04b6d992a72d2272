//! Wire-level data transfer objects.
//!
//! Shapes that cross the process boundary: form bodies submitted by the browser and the
//! JSON payload returned by the remote book search API. Server-side domain models live in
//! `crate::server::model` and are built from these types.

pub mod book;
pub mod volume;
