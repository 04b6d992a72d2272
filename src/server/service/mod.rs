//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller layer and the data layer. Services are responsible for:
//!
//! - **Orchestration**: Calling the catalog store or the remote search API on behalf of a handler
//! - **Domain Models**: Converting entity models and API payloads into domain models
//! - **Error Mapping**: Lifting data-layer errors into `AppError`

pub mod book;
pub mod search;
