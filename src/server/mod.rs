//! Server-side catalog backend.
//!
//! This module contains the complete backend for the book catalog: HTTP handlers,
//! business logic, data access and the server-rendered pages. The backend uses Axum as
//! the web framework, SeaORM for the catalog store, reqwest for the remote book search
//! API and askama for HTML templates.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and form conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Catalog store queries and remote search API calls
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and error page rendering
//! - **Middleware** (`middleware/`) - Request rewriting applied before routing
//! - **View** (`view`) - askama page templates
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, search URL)
//! - **Startup** (`startup`) - Database connection, migrations and HTTP client setup
//! - **Router** (`router`) - Route table and the finished application service
//!
//! # Request Flow
//!
//! 1. **Middleware** rewrites overridden `POST` requests to `PUT`, `PATCH` or `DELETE`
//! 2. **Router** dispatches to a controller, or to the not found handler
//! 3. **Controller** parses input into params and calls a service
//! 4. **Service** runs the operation against the data layer
//! 5. **Controller** renders a page or redirects

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
