//! Remedy endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use catalog::{ContentStore, SubjectRef};
use projections::{RemedyView, ViewAssembler};

use super::parse_entity_id;
use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::loader::{self, Include, IncludeParams, Loaded};
use crate::state::AppState;

/// GET /remedies — list remedies; ratings included unless `include` says otherwise.
#[tracing::instrument(skip(state))]
pub async fn list<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Query(params): Query<IncludeParams>,
) -> Result<Json<Vec<RemedyView>>, ApiError> {
    let include = Include::parse(&params, Include::ratings())?;
    let favorites = loader::favorites(&state.store, viewer).await?;
    let assembler = ViewAssembler::new(viewer, &favorites);

    let mut views = Vec::new();
    for remedy in state.store.list_remedies().await? {
        let mut loaded = Loaded::default();
        loader::reviews(&state.store, SubjectRef::remedy(remedy.id), include, &mut loaded).await?;
        views.push(assembler.remedy(&remedy, loaded.relations()));
    }

    Ok(Json(views))
}

/// GET /remedies/{id} — a single remedy with its reviews.
#[tracing::instrument(skip(state))]
pub async fn get<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<String>,
    Query(params): Query<IncludeParams>,
) -> Result<Json<RemedyView>, ApiError> {
    let remedy_id = parse_entity_id(&id)?;
    let include = Include::parse(&params, Include::all())?;

    let remedy = state
        .store
        .get_remedy(remedy_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Remedy {id} not found")))?;

    let favorites = loader::favorites(&state.store, viewer).await?;
    let mut loaded = Loaded::default();
    loader::reviews(&state.store, SubjectRef::remedy(remedy.id), include, &mut loaded).await?;

    let view = ViewAssembler::new(viewer, &favorites).remedy(&remedy, loaded.relations());
    Ok(Json(view))
}
