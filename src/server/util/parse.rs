use crate::server::error::AppError;

/// Parses a book ID taken from a request path
///
/// # Arguments
/// - `value` - The path segment to parse into an `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed book ID
/// - `Err(AppError::BadRequest)` - The segment is not an integer in range
pub fn parse_book_id(value: &str) -> Result<i32, AppError> {
    value.parse::<i32>().map_err(|e| {
        tracing::debug!("Rejected book id '{}': {}", value, e);
        AppError::BadRequest("Invalid book id".to_string())
    })
}
