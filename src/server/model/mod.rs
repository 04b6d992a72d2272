//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! catalog entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and from form or search API DTOs at the service
//! boundary, so views and handlers only ever see these types.

pub mod book;
pub mod search;
