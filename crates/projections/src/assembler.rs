//! Composition of projections into response payloads.

use catalog::{
    Course, EntityId, EntityType, Favorite, Lesson, LessonProgress, Reaction, Remedy, Review,
    Video,
};

use crate::favorite::{self, FavoriteLookup};
use crate::field::Field;
use crate::progress::{self, ProgressMap};
use crate::rating::{self, RatingSummary};
use crate::reaction;
use crate::viewer::Viewer;
use crate::views::{CourseDetailView, LessonView, RemedyView, ReviewView, VideoView};

static NO_FAVORITES: Vec<Favorite> = Vec::new();

/// Related records the caller loaded alongside a primary entity.
///
/// `None` means "not requested" and omits the dependent fields; `Some(&[])`
/// means "requested, nothing there" and yields zero/empty values.
///
/// - `reviews` drives `average_rating` / `review_count`
/// - `reviews` + `reactions` together embed the `reviews` list
/// - `lessons` drives the `lessons` list and the course progress fields
/// - `progress` is the viewer's lesson progress; ignored for guests
#[derive(Debug, Clone, Copy, Default)]
pub struct Relations<'a> {
    pub reviews: Option<&'a [Review]>,
    pub reactions: Option<&'a [Reaction]>,
    pub lessons: Option<&'a [Lesson]>,
    pub progress: Option<&'a [LessonProgress]>,
}

impl<'a> Relations<'a> {
    /// No relations loaded.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_reviews(mut self, reviews: &'a [Review]) -> Self {
        self.reviews = Some(reviews);
        self
    }

    pub fn with_reactions(mut self, reactions: &'a [Reaction]) -> Self {
        self.reactions = Some(reactions);
        self
    }

    pub fn with_lessons(mut self, lessons: &'a [Lesson]) -> Self {
        self.lessons = Some(lessons);
        self
    }

    pub fn with_progress(mut self, progress: &'a [LessonProgress]) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Builds response payloads for one viewer.
///
/// Holds the request-scoped viewer and their favorites so that every view
/// built during a request resolves `is_fav` and reactions the same way.
pub struct ViewAssembler<'a> {
    viewer: Viewer,
    favorites: &'a dyn FavoriteLookup,
}

impl<'a> ViewAssembler<'a> {
    pub fn new(viewer: Viewer, favorites: &'a dyn FavoriteLookup) -> Self {
        Self { viewer, favorites }
    }

    /// An assembler for an unauthenticated viewer.
    pub fn guest() -> ViewAssembler<'static> {
        ViewAssembler::without_favorites(Viewer::Guest)
    }

    /// An assembler that treats nothing as favorited, for payloads without `is_fav`.
    pub fn without_favorites(viewer: Viewer) -> ViewAssembler<'static> {
        ViewAssembler {
            viewer,
            favorites: &NO_FAVORITES,
        }
    }

    pub fn remedy(&self, remedy: &Remedy, relations: Relations<'_>) -> RemedyView {
        RemedyView {
            id: remedy.id,
            title: remedy.title.clone(),
            description: remedy.description.clone(),
            is_fav: self.is_fav(EntityType::Remedy, remedy.id),
            rating: self.rating(&relations),
            reviews: self.reviews(&relations),
        }
    }

    pub fn video(&self, video: &Video, relations: Relations<'_>) -> VideoView {
        VideoView {
            id: video.id,
            title: video.title.clone(),
            url: video.url.clone(),
            is_fav: self.is_fav(EntityType::Video, video.id),
            rating: self.rating(&relations),
            reviews: self.reviews(&relations),
        }
    }

    pub fn course(&self, course: &Course, relations: Relations<'_>) -> CourseDetailView {
        let progress_map = self.progress_map(&relations);

        let lessons = Field::from(relations.lessons).map(|lessons| {
            lessons
                .iter()
                .map(|l| self.lesson(l, progress_map.as_ref()))
                .collect()
        });
        let progress = Field::from(relations.lessons)
            .map(|lessons| progress::project(lessons, progress_map.as_ref()));

        CourseDetailView {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            is_fav: self.is_fav(EntityType::Course, course.id),
            rating: self.rating(&relations),
            reviews: self.reviews(&relations),
            lessons,
            progress,
        }
    }

    /// Builds a review payload. `reactions` may span several reviews; only
    /// those attached to `review` are considered.
    pub fn review(&self, review: &Review, reactions: &[Reaction]) -> ReviewView {
        let own = reaction::for_review(reactions, review.id);
        ReviewView {
            id: review.id,
            author_id: review.author_id,
            rating: review.rating,
            message: review.message.clone(),
            status: review.status,
            created_at: review.created_at,
            reactions: reaction::tally(&own),
            user_reaction: reaction::resolve(&self.viewer, &own),
        }
    }

    /// Builds a lesson payload. `progress` is `None` for guests.
    pub fn lesson(&self, lesson: &Lesson, progress: Option<&ProgressMap>) -> LessonView {
        LessonView {
            id: lesson.id,
            title: lesson.title.clone(),
            order: lesson.order,
            duration_seconds: lesson.duration_seconds,
            status: progress.map(|p| p.get(&lesson.id).copied().unwrap_or_default()),
        }
    }

    fn is_fav(&self, entity_type: EntityType, entity_id: EntityId) -> bool {
        favorite::is_favorite(&self.viewer, entity_type, entity_id, self.favorites)
    }

    fn rating(&self, relations: &Relations<'_>) -> Field<RatingSummary> {
        Field::from(relations.reviews).map(|reviews| rating::aggregate(reviews))
    }

    fn reviews(&self, relations: &Relations<'_>) -> Field<Vec<ReviewView>> {
        match (relations.reviews, relations.reactions) {
            (Some(reviews), Some(reactions)) => Field::Present(
                reviews
                    .iter()
                    .map(|review| self.review(review, reactions))
                    .collect(),
            ),
            _ => Field::Omitted,
        }
    }

    /// The viewer's progress, or `None` for guests. A user without loaded
    /// progress records is treated as having none.
    fn progress_map(&self, relations: &Relations<'_>) -> Option<ProgressMap> {
        let user_id = self.viewer.user_id()?;
        let records = relations.progress.unwrap_or_default();
        Some(progress::progress_map(
            records.iter().filter(|p| p.user_id == user_id),
        ))
    }
}
