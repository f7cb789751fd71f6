use async_trait::async_trait;

use crate::{
    Course, EntityId, EntityType, Favorite, Lesson, LessonProgress, NewReview, ProgressStatus,
    Reaction, ReactionKind, Remedy, Result, Review, SubjectRef, UserId, Video,
};

/// Persistence port for the content catalog.
///
/// Read methods return `Ok(None)` or an empty collection for missing data;
/// only writes that reference unknown records fail with
/// [`CatalogError::NotFound`](crate::CatalogError::NotFound).
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Resolves a bearer token to the user it was issued to.
    async fn user_for_token(&self, token: &str) -> Result<Option<UserId>>;

    async fn get_remedy(&self, id: EntityId) -> Result<Option<Remedy>>;

    async fn list_remedies(&self) -> Result<Vec<Remedy>>;

    async fn get_course(&self, id: EntityId) -> Result<Option<Course>>;

    async fn list_courses(&self) -> Result<Vec<Course>>;

    async fn get_video(&self, id: EntityId) -> Result<Option<Video>>;

    async fn get_lesson(&self, id: EntityId) -> Result<Option<Lesson>>;

    /// Retrieves the lessons of a course sorted by their `order`.
    async fn lessons_for_course(&self, course_id: EntityId) -> Result<Vec<Lesson>>;

    /// Retrieves reviews of a subject, oldest first.
    ///
    /// With `public_only` set, reviews that are not published are filtered out.
    async fn reviews_for_subject(&self, subject: SubjectRef, public_only: bool)
    -> Result<Vec<Review>>;

    async fn get_review(&self, id: EntityId) -> Result<Option<Review>>;

    /// Retrieves every reaction attached to any of the given reviews.
    async fn reactions_for_reviews(&self, review_ids: &[EntityId]) -> Result<Vec<Reaction>>;

    async fn favorites_for_user(&self, user_id: UserId) -> Result<Vec<Favorite>>;

    /// Retrieves a user's progress records for one course.
    async fn progress_for_course(
        &self,
        user_id: UserId,
        course_id: EntityId,
    ) -> Result<Vec<LessonProgress>>;

    /// Stores a new published review written by `author_id`.
    async fn add_review(&self, author_id: UserId, review: NewReview) -> Result<Review>;

    /// Records a reaction, replacing any earlier reaction by the same user.
    async fn set_reaction(
        &self,
        review_id: EntityId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> Result<Reaction>;

    /// Adds the favorite if absent, removes it otherwise.
    ///
    /// Returns whether the entity is a favorite after the toggle.
    async fn toggle_favorite(
        &self,
        user_id: UserId,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<bool>;

    /// Upserts the user's progress on a lesson.
    async fn set_progress(
        &self,
        user_id: UserId,
        lesson_id: EntityId,
        status: ProgressStatus,
    ) -> Result<LessonProgress>;
}
