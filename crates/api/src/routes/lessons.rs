//! Lesson progress updates.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use catalog::{ContentStore, ProgressStatus};
use projections::{CourseDetailView, ViewAssembler};
use serde::Deserialize;

use super::parse_entity_id;
use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::loader::{self, Include, Loaded};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub status: ProgressStatus,
}

/// PUT /lessons/{id}/progress — record the user's progress on a lesson.
///
/// Responds with the parent course's lessons and recomputed progress.
#[tracing::instrument(skip(state))]
pub async fn update_progress<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    viewer: CurrentViewer,
    Path(id): Path<String>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<CourseDetailView>, ApiError> {
    let user_id = viewer.require_user()?;
    let lesson_id = parse_entity_id(&id)?;

    // Nothing is written unless the parent course resolves.
    let lesson = state
        .store
        .get_lesson(lesson_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Lesson {id} not found")))?;
    let course = state
        .store
        .get_course(lesson.course_id)
        .await?
        .ok_or_else(|| {
            ApiError::Internal(format!(
                "Lesson {id} belongs to missing course {}",
                lesson.course_id
            ))
        })?;

    state
        .store
        .set_progress(user_id, lesson_id, req.status)
        .await?;
    metrics::counter!("lesson_progress_updated").increment(1);

    let include = Include {
        lessons: true,
        ..Include::default()
    };
    let favorites = loader::favorites(&state.store, viewer.0).await?;
    let mut loaded = Loaded::default();
    loader::lessons(&state.store, course.id, viewer.0, include, &mut loaded).await?;

    let view = ViewAssembler::new(viewer.0, &favorites).course(&course, loaded.relations());
    Ok(Json(view))
}
