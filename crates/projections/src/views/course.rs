//! Course detail payload.

use catalog::EntityId;
use serde::Serialize;

use crate::field::Field;
use crate::progress::CourseProgress;
use crate::rating::RatingSummary;
use crate::views::{LessonView, ReviewView};

/// A course with its optional ratings, reviews, lessons and viewer progress.
///
/// Progress fields (`percentage`, `total_lessons`, `completed_lessons`,
/// `coming_lesson_id`, `is_started`) sit at the top level of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetailView {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub is_fav: bool,
    #[serde(flatten)]
    pub rating: Field<RatingSummary>,
    #[serde(skip_serializing_if = "Field::is_omitted")]
    pub reviews: Field<Vec<ReviewView>>,
    #[serde(skip_serializing_if = "Field::is_omitted")]
    pub lessons: Field<Vec<LessonView>>,
    #[serde(flatten)]
    pub progress: Field<CourseProgress>,
}
