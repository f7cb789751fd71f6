//! HTTP route handlers.

pub mod courses;
pub mod favorites;
pub mod lessons;
pub mod ops;
pub mod remedies;
pub mod reviews;
pub mod videos;

use catalog::EntityId;

use crate::error::ApiError;

fn parse_entity_id(id: &str) -> Result<EntityId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
