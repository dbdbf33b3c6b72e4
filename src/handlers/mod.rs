//! HTTP handlers for the category and product resources.

pub mod category;
pub mod product;

use crate::error::AppError;

/// Parse a numeric id from a path or query segment. `invalid` is the 400 message on failure.
fn parse_id(raw: &str, invalid: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(invalid.to_string()))
}
