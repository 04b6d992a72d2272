use crate::server::error::AppError;

/// Body of the diagnostic test page.
pub const TEST_PAGE_BODY: &str = "Test page please ignore.";

/// Diagnostic page with a fixed body.
pub async fn test_page() -> &'static str {
    tracing::warn!("Test page requested");

    TEST_PAGE_BODY
}

/// Catch-all for unmatched paths and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
