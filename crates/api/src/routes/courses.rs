//! Course endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{ContentStore, SubjectRef};
use projections::{CourseDetailView, ViewAssembler};

use super::parse_entity_id;
use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::loader::{self, Include, IncludeParams, Loaded};
use crate::state::AppState;

/// GET /courses — list courses; ratings included unless `include` says otherwise.
#[tracing::instrument(skip(state))]
pub async fn list<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Query(params): Query<IncludeParams>,
) -> Result<Json<Vec<CourseDetailView>>, ApiError> {
    let include = Include::parse(&params, Include::ratings())?;
    let favorites = loader::favorites(&state.store, viewer).await?;
    let assembler = ViewAssembler::new(viewer, &favorites);

    let mut views = Vec::new();
    for course in state.store.list_courses().await? {
        let mut loaded = Loaded::default();
        loader::reviews(&state.store, SubjectRef::course(course.id), include, &mut loaded).await?;
        loader::lessons(&state.store, course.id, viewer, include, &mut loaded).await?;
        views.push(assembler.course(&course, loaded.relations()));
    }

    Ok(Json(views))
}

/// GET /courses/{id} — course detail with lessons, reviews and the viewer's progress.
#[tracing::instrument(skip(state))]
pub async fn get<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<String>,
    Query(params): Query<IncludeParams>,
) -> Result<Json<CourseDetailView>, ApiError> {
    let course_id = parse_entity_id(&id)?;
    let include = Include::parse(&params, Include::all())?;

    let course = state
        .store
        .get_course(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Course {id} not found")))?;

    let favorites = loader::favorites(&state.store, viewer).await?;
    let mut loaded = Loaded::default();
    loader::reviews(&state.store, SubjectRef::course(course.id), include, &mut loaded).await?;
    loader::lessons(&state.store, course.id, viewer, include, &mut loaded).await?;

    let view = ViewAssembler::new(viewer, &favorites).course(&course, loaded.relations());
    Ok(Json(view))
}
