//! Loading of the related records a view was asked to include.
//!
//! Handlers parse `?include=` into an [`Include`], load the requested
//! relations into a [`Loaded`] and hand [`Loaded::relations`] to the
//! [`ViewAssembler`](projections::ViewAssembler). Relations that were not
//! requested are never fetched.

use catalog::{
    ContentStore, EntityId, Favorite, Lesson, LessonProgress, Reaction, Review, SubjectRef,
};
use projections::{Relations, Viewer};
use serde::Deserialize;

use crate::error::ApiError;

/// Raw `?include=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeParams {
    pub include: Option<String>,
}

/// Relations requested by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Include {
    /// `average_rating` and `review_count`.
    pub ratings: bool,
    /// The embedded review list. Implies `ratings`.
    pub reviews: bool,
    /// The lesson list and course progress.
    pub lessons: bool,
}

impl Include {
    /// Everything.
    pub fn all() -> Self {
        Self {
            ratings: true,
            reviews: true,
            lessons: true,
        }
    }

    /// Ratings only, used by list endpoints.
    pub fn ratings() -> Self {
        Self {
            ratings: true,
            ..Self::default()
        }
    }

    /// Parses a comma-separated include list, falling back to `default` when
    /// the parameter is absent. An empty value includes nothing.
    pub fn parse(params: &IncludeParams, default: Include) -> Result<Self, ApiError> {
        let Some(raw) = params.include.as_deref() else {
            return Ok(default);
        };

        let mut include = Include::default();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part {
                "ratings" => include.ratings = true,
                "reviews" => {
                    include.ratings = true;
                    include.reviews = true;
                }
                "lessons" => include.lessons = true,
                other => {
                    return Err(ApiError::BadRequest(format!(
                        "Unknown include '{other}', expected ratings, reviews or lessons"
                    )));
                }
            }
        }
        Ok(include)
    }
}

/// Owned relation data backing a [`Relations`] borrow.
#[derive(Debug, Default)]
pub struct Loaded {
    pub reviews: Option<Vec<Review>>,
    pub reactions: Option<Vec<Reaction>>,
    pub lessons: Option<Vec<Lesson>>,
    pub progress: Option<Vec<LessonProgress>>,
}

impl Loaded {
    pub fn relations(&self) -> Relations<'_> {
        Relations {
            reviews: self.reviews.as_deref(),
            reactions: self.reactions.as_deref(),
            lessons: self.lessons.as_deref(),
            progress: self.progress.as_deref(),
        }
    }
}

/// Loads the viewer's favorites. Guests have none and cost no lookup.
pub async fn favorites<S: ContentStore>(
    store: &S,
    viewer: Viewer,
) -> Result<Vec<Favorite>, ApiError> {
    match viewer.user_id() {
        Some(user_id) => Ok(store.favorites_for_user(user_id).await?),
        None => Ok(Vec::new()),
    }
}

/// Loads published reviews (and their reactions, for the embedded list).
pub async fn reviews<S: ContentStore>(
    store: &S,
    subject: SubjectRef,
    include: Include,
    loaded: &mut Loaded,
) -> Result<(), ApiError> {
    if !include.ratings && !include.reviews {
        return Ok(());
    }

    let reviews = store.reviews_for_subject(subject, true).await?;
    if include.reviews {
        let ids: Vec<EntityId> = reviews.iter().map(|r| r.id).collect();
        loaded.reactions = Some(store.reactions_for_reviews(&ids).await?);
    }
    loaded.reviews = Some(reviews);
    Ok(())
}

/// Loads a course's lessons and, for users, their progress on it.
pub async fn lessons<S: ContentStore>(
    store: &S,
    course_id: EntityId,
    viewer: Viewer,
    include: Include,
    loaded: &mut Loaded,
) -> Result<(), ApiError> {
    if !include.lessons {
        return Ok(());
    }

    loaded.lessons = Some(store.lessons_for_course(course_id).await?);
    if let Some(user_id) = viewer.user_id() {
        loaded.progress = Some(store.progress_for_course(user_id, course_id).await?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: Option<&str>) -> IncludeParams {
        IncludeParams {
            include: raw.map(String::from),
        }
    }

    #[test]
    fn absent_param_uses_default() {
        assert_eq!(Include::parse(&params(None), Include::all()).unwrap(), Include::all());
    }

    #[test]
    fn empty_param_includes_nothing() {
        assert_eq!(
            Include::parse(&params(Some("")), Include::all()).unwrap(),
            Include::default()
        );
    }

    #[test]
    fn reviews_implies_ratings() {
        let include = Include::parse(&params(Some("reviews")), Include::default()).unwrap();
        assert!(include.ratings);
        assert!(include.reviews);
        assert!(!include.lessons);
    }

    #[test]
    fn tolerates_whitespace() {
        let include = Include::parse(&params(Some(" lessons , ratings ")), Include::default())
            .unwrap();
        assert_eq!(
            include,
            Include {
                ratings: true,
                reviews: false,
                lessons: true
            }
        );
    }

    #[test]
    fn unknown_include_is_rejected() {
        assert!(matches!(
            Include::parse(&params(Some("ratings,comments")), Include::default()),
            Err(ApiError::BadRequest(_))
        ));
    }
}
