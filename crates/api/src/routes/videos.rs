//! Video endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{ContentStore, SubjectRef};
use projections::{VideoView, ViewAssembler};

use super::parse_entity_id;
use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::loader::{self, Include, IncludeParams, Loaded};
use crate::state::AppState;

/// GET /videos/{id} — a single video with its reviews.
#[tracing::instrument(skip(state))]
pub async fn get<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<String>,
    Query(params): Query<IncludeParams>,
) -> Result<Json<VideoView>, ApiError> {
    let video_id = parse_entity_id(&id)?;
    let include = Include::parse(&params, Include::all())?;

    let video = state
        .store
        .get_video(video_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Video {id} not found")))?;

    let favorites = loader::favorites(&state.store, viewer).await?;
    let mut loaded = Loaded::default();
    loader::reviews(&state.store, SubjectRef::video(video.id), include, &mut loaded).await?;

    let view = ViewAssembler::new(viewer, &favorites).video(&video, loaded.relations());
    Ok(Json(view))
}
