//! Course progress projection.

use std::collections::HashMap;

use catalog::{EntityId, Lesson, LessonProgress, ProgressStatus};
use serde::Serialize;

use crate::rating::round_one_decimal;

/// Per-lesson status of one user, keyed by lesson ID.
pub type ProgressMap = HashMap<EntityId, ProgressStatus>;

/// A user's completion state for a course.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CourseProgress {
    /// Completed share of the course in percent, one decimal.
    pub percentage: f64,
    pub total_lessons: u64,
    pub completed_lessons: u64,
    /// The lesson to resume, `None` once everything is completed.
    pub coming_lesson_id: Option<EntityId>,
    pub is_started: bool,
}

/// Builds a [`ProgressMap`] from progress records.
///
/// Later records for the same lesson override earlier ones.
pub fn progress_map<'a>(records: impl IntoIterator<Item = &'a LessonProgress>) -> ProgressMap {
    records
        .into_iter()
        .map(|p| (p.lesson_id, p.status))
        .collect()
}

/// Projects course progress.
///
/// `lessons` must be in course order. `progress` is `None` for guests; a
/// guest is pointed at the first lesson and never counts as started.
/// Entries in `progress` that match no lesson are ignored.
pub fn project(lessons: &[Lesson], progress: Option<&ProgressMap>) -> CourseProgress {
    let total = lessons.len() as u64;

    let Some(progress) = progress else {
        return CourseProgress {
            total_lessons: total,
            coming_lesson_id: lessons.first().map(|l| l.id),
            ..CourseProgress::default()
        };
    };

    let status_of = |lesson: &Lesson| progress.get(&lesson.id).copied().unwrap_or_default();

    let completed = lessons
        .iter()
        .filter(|&l| status_of(l) == ProgressStatus::Completed)
        .count() as u64;

    let coming_lesson_id = lessons
        .iter()
        .find(|&l| status_of(l) != ProgressStatus::Completed)
        .map(|l| l.id);

    let percentage = if total == 0 {
        0.0
    } else {
        round_one_decimal(completed as f64 * 100.0 / total as f64)
    };

    CourseProgress {
        percentage,
        total_lessons: total,
        completed_lessons: completed,
        coming_lesson_id,
        is_started: lessons.iter().any(|l| status_of(l).is_started()),
    }
}
