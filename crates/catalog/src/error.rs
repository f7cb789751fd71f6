use thiserror::Error;

use crate::{EntityId, EntityType};

/// Errors that can occur when interacting with the content store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A review was submitted with a rating outside 1..=5.
    #[error("Invalid rating {0}: must be between 1 and 5")]
    InvalidRating(u8),

    /// A favorite references a record that does not exist.
    #[error("Unknown {entity_type} {id}")]
    UnknownEntity { entity_type: EntityType, id: EntityId },

    /// The backing storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Shorthand for a [`CatalogError::NotFound`].
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Result type for content store operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
