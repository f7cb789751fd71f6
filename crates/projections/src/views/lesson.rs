//! Lesson payload.

use catalog::{EntityId, ProgressStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonView {
    pub id: EntityId,
    pub title: String,
    pub order: u32,
    pub duration_seconds: u32,
    /// The viewer's status; `null` for guests.
    pub status: Option<ProgressStatus>,
}
