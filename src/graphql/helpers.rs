use async_graphql::ID;

use crate::errors::{AppError, AppResult};

/// Helper to read a non-blank identifier from a GraphQL ID
pub fn parse_id(id: &ID) -> AppResult<String> {
    let value = id.trim();
    if value.is_empty() {
        return Err(AppError::ValidationError("ID must not be blank".to_string()));
    }
    Ok(value.to_string())
}
