//! Review listing, submission and reactions.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use catalog::{ContentStore, EntityId, NewReview, ReactionKind, SubjectRef, SubjectType};
use projections::{ReviewView, ViewAssembler};
use serde::Deserialize;

use super::parse_entity_id;
use crate::error::ApiError;
use crate::identity::CurrentViewer;
use crate::state::AppState;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub subject_type: SubjectType,
    pub subject_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    pub kind: ReactionKind,
}

// -- Handlers --

/// GET /reviews?subject_type=&subject_id= — published reviews of a subject.
#[tracing::instrument(skip(state))]
pub async fn list<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    CurrentViewer(viewer): CurrentViewer,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<Vec<ReviewView>>, ApiError> {
    let subject = SubjectRef::new(query.subject_type, parse_entity_id(&query.subject_id)?);

    let reviews = state.store.reviews_for_subject(subject, true).await?;
    let ids: Vec<EntityId> = reviews.iter().map(|r| r.id).collect();
    let reactions = state.store.reactions_for_reviews(&ids).await?;

    let assembler = ViewAssembler::without_favorites(viewer);
    let views = reviews
        .iter()
        .map(|review| assembler.review(review, &reactions))
        .collect();

    Ok(Json(views))
}

/// POST /reviews — submit a review as the current user.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    viewer: CurrentViewer,
    Json(req): Json<NewReview>,
) -> Result<(StatusCode, Json<ReviewView>), ApiError> {
    let author_id = viewer.require_user()?;
    let review = state.store.add_review(author_id, req).await?;
    metrics::counter!("reviews_created", "subject_type" => review.subject.kind.as_str())
        .increment(1);
    tracing::info!(review_id = %review.id, subject_type = %review.subject.kind, "review created");

    let view = ViewAssembler::without_favorites(viewer.0).review(&review, &[]);
    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /reviews/{id}/reactions — like or dislike a review.
///
/// A second reaction by the same user replaces the first.
#[tracing::instrument(skip(state))]
pub async fn react<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    viewer: CurrentViewer,
    Path(id): Path<String>,
    Json(req): Json<ReactRequest>,
) -> Result<Json<ReviewView>, ApiError> {
    let user_id = viewer.require_user()?;
    let review_id = parse_entity_id(&id)?;

    state.store.set_reaction(review_id, user_id, req.kind).await?;
    metrics::counter!("reactions_recorded").increment(1);

    let review = state
        .store
        .get_review(review_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Review {id} not found")))?;
    let reactions = state.store.reactions_for_reviews(&[review_id]).await?;

    let view = ViewAssembler::without_favorites(viewer.0).review(&review, &reactions);
    Ok(Json(view))
}
