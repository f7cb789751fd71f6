use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    CatalogError, Course, EntityId, EntityType, Favorite, Lesson, LessonProgress, NewReview,
    ProgressStatus, Reaction, ReactionKind, Remedy, Result, Review, SubjectRef, SubjectType,
    UserId, Video, store::ContentStore,
};

#[derive(Default)]
struct ContentState {
    tokens: HashMap<String, UserId>,
    remedies: HashMap<EntityId, Remedy>,
    courses: HashMap<EntityId, Course>,
    videos: HashMap<EntityId, Video>,
    articles: HashSet<EntityId>,
    lessons: HashMap<EntityId, Lesson>,
    /// Insertion order doubles as creation order.
    reviews: Vec<Review>,
    reactions: Vec<Reaction>,
    favorites: HashSet<Favorite>,
    progress: HashMap<(UserId, EntityId), LessonProgress>,
}

impl ContentState {
    fn entity_exists(&self, entity_type: EntityType, id: EntityId) -> bool {
        match entity_type {
            EntityType::Remedy => self.remedies.contains_key(&id),
            EntityType::Course => self.courses.contains_key(&id),
            EntityType::Video => self.videos.contains_key(&id),
            EntityType::Article => self.articles.contains(&id),
        }
    }
}

/// In-memory content store.
///
/// Backs the API server in development and every test; provides the same
/// interface a database-backed store would.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    state: Arc<RwLock<ContentState>>,
}

impl InMemoryContentStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bearer token for a user.
    pub async fn issue_token(&self, token: impl Into<String>, user_id: UserId) {
        self.state.write().await.tokens.insert(token.into(), user_id);
    }

    pub async fn insert_remedy(&self, remedy: Remedy) {
        self.state.write().await.remedies.insert(remedy.id, remedy);
    }

    pub async fn insert_course(&self, course: Course) {
        self.state.write().await.courses.insert(course.id, course);
    }

    pub async fn insert_video(&self, video: Video) {
        self.state.write().await.videos.insert(video.id, video);
    }

    /// Registers an article id so it can be favorited. Article bodies live elsewhere.
    pub async fn insert_article(&self, id: EntityId) {
        self.state.write().await.articles.insert(id);
    }

    pub async fn insert_lesson(&self, lesson: Lesson) {
        self.state.write().await.lessons.insert(lesson.id, lesson);
    }

    /// Inserts a review as-is, without rating validation.
    pub async fn insert_review(&self, review: Review) {
        self.state.write().await.reviews.push(review);
    }

    /// Inserts a reaction as-is, without replacing earlier ones.
    pub async fn insert_reaction(&self, reaction: Reaction) {
        self.state.write().await.reactions.push(reaction);
    }

    pub async fn insert_favorite(&self, favorite: Favorite) {
        self.state.write().await.favorites.insert(favorite);
    }

    pub async fn insert_progress(&self, progress: LessonProgress) {
        self.state
            .write()
            .await
            .progress
            .insert((progress.user_id, progress.lesson_id), progress);
    }

    /// Returns the total number of reviews stored.
    pub async fn review_count(&self) -> usize {
        self.state.read().await.reviews.len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn user_for_token(&self, token: &str) -> Result<Option<UserId>> {
        Ok(self.state.read().await.tokens.get(token).copied())
    }

    async fn get_remedy(&self, id: EntityId) -> Result<Option<Remedy>> {
        Ok(self.state.read().await.remedies.get(&id).cloned())
    }

    async fn list_remedies(&self) -> Result<Vec<Remedy>> {
        let state = self.state.read().await;
        let mut remedies: Vec<_> = state.remedies.values().cloned().collect();
        remedies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(remedies)
    }

    async fn get_course(&self, id: EntityId) -> Result<Option<Course>> {
        Ok(self.state.read().await.courses.get(&id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let state = self.state.read().await;
        let mut courses: Vec<_> = state.courses.values().cloned().collect();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(courses)
    }

    async fn get_video(&self, id: EntityId) -> Result<Option<Video>> {
        Ok(self.state.read().await.videos.get(&id).cloned())
    }

    async fn get_lesson(&self, id: EntityId) -> Result<Option<Lesson>> {
        Ok(self.state.read().await.lessons.get(&id).cloned())
    }

    async fn lessons_for_course(&self, course_id: EntityId) -> Result<Vec<Lesson>> {
        let state = self.state.read().await;
        let mut lessons: Vec<_> = state
            .lessons
            .values()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| (l.order, l.id));
        Ok(lessons)
    }

    async fn reviews_for_subject(
        &self,
        subject: SubjectRef,
        public_only: bool,
    ) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.subject == subject && (!public_only || r.status.is_public()))
            .cloned()
            .collect())
    }

    async fn get_review(&self, id: EntityId) -> Result<Option<Review>> {
        let state = self.state.read().await;
        Ok(state.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn reactions_for_reviews(&self, review_ids: &[EntityId]) -> Result<Vec<Reaction>> {
        let state = self.state.read().await;
        Ok(state
            .reactions
            .iter()
            .filter(|r| review_ids.contains(&r.review_id))
            .copied()
            .collect())
    }

    async fn favorites_for_user(&self, user_id: UserId) -> Result<Vec<Favorite>> {
        let state = self.state.read().await;
        Ok(state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .copied()
            .collect())
    }

    async fn progress_for_course(
        &self,
        user_id: UserId,
        course_id: EntityId,
    ) -> Result<Vec<LessonProgress>> {
        let state = self.state.read().await;
        Ok(state
            .progress
            .values()
            .filter(|p| p.user_id == user_id && p.course_id == course_id)
            .copied()
            .collect())
    }

    async fn add_review(&self, author_id: UserId, review: NewReview) -> Result<Review> {
        if !(1..=5).contains(&review.rating) {
            return Err(CatalogError::InvalidRating(review.rating));
        }

        let mut state = self.state.write().await;
        let subject = review.subject;
        if !state.entity_exists(subject.kind.into(), subject.id) {
            return Err(CatalogError::not_found(subject_entity_name(subject.kind), subject.id));
        }

        let stored = Review::new(author_id, subject, review.rating, review.message);
        state.reviews.push(stored.clone());
        tracing::debug!(review_id = %stored.id, subject = %subject.kind, "review stored");
        Ok(stored)
    }

    async fn set_reaction(
        &self,
        review_id: EntityId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> Result<Reaction> {
        let mut state = self.state.write().await;
        if !state.reviews.iter().any(|r| r.id == review_id) {
            return Err(CatalogError::not_found("Review", review_id));
        }

        // One reaction per (review, user): replace whatever was there.
        state
            .reactions
            .retain(|r| !(r.review_id == review_id && r.user_id == user_id));
        let reaction = Reaction::new(review_id, user_id, kind);
        state.reactions.push(reaction);
        Ok(reaction)
    }

    async fn toggle_favorite(
        &self,
        user_id: UserId,
        entity_type: EntityType,
        entity_id: EntityId,
    ) -> Result<bool> {
        let mut state = self.state.write().await;
        if !state.entity_exists(entity_type, entity_id) {
            return Err(CatalogError::UnknownEntity {
                entity_type,
                id: entity_id,
            });
        }

        let favorite = Favorite::new(user_id, entity_type, entity_id);
        if state.favorites.remove(&favorite) {
            Ok(false)
        } else {
            state.favorites.insert(favorite);
            Ok(true)
        }
    }

    async fn set_progress(
        &self,
        user_id: UserId,
        lesson_id: EntityId,
        status: ProgressStatus,
    ) -> Result<LessonProgress> {
        let mut state = self.state.write().await;
        let course_id = state
            .lessons
            .get(&lesson_id)
            .map(|l| l.course_id)
            .ok_or_else(|| CatalogError::not_found("Lesson", lesson_id))?;

        let progress = LessonProgress::new(user_id, course_id, lesson_id, status);
        state.progress.insert((user_id, lesson_id), progress);
        Ok(progress)
    }
}

fn subject_entity_name(kind: SubjectType) -> &'static str {
    match kind {
        SubjectType::Remedy => "Remedy",
        SubjectType::Course => "Course",
        SubjectType::Video => "Video",
    }
}
