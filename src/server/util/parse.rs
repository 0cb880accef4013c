use async_graphql::ID;

use crate::server::error::AppError;

/// Parses a GraphQL `ID` into a database id.
///
/// # Arguments
/// - `id` - The ID as received from the client
/// - `what` - Name of the resource, used in the error message
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The ID is not an integer
pub fn parse_id(id: &ID, what: &str) -> Result<i32, AppError> {
    id.parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} id: {}", what, id.as_str())))
}
