//! Favorite toggling.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use catalog::{ContentStore, EntityId, EntityType};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub entity_type: EntityType,
    pub entity_id: EntityId,
    pub is_fav: bool,
}

/// POST /favorites — add the entity to the user's favorites, or remove it if present.
#[tracing::instrument(skip(state))]
pub async fn toggle<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    viewer: CurrentViewer,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let user_id = viewer.require_user()?;
    let is_fav = state
        .store
        .toggle_favorite(user_id, req.entity_type, req.entity_id)
        .await?;
    metrics::counter!("favorites_toggled", "entity_type" => req.entity_type.as_str())
        .increment(1);

    Ok(Json(FavoriteResponse {
        entity_type: req.entity_type,
        entity_id: req.entity_id,
        is_fav,
    }))
}
