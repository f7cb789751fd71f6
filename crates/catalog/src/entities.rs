//! Catalog records as materialized by the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EntityId, EntityType, ProgressStatus, ReactionKind, ReviewStatus, SubjectType, UserId};

/// A home remedy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remedy {
    pub id: EntityId,
    pub title: String,
    pub description: String,
}

impl Remedy {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A course made of ordered lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A standalone video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: EntityId,
    pub title: String,
    pub url: String,
}

impl Video {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A lesson within a course. `order` is the position inside the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: EntityId,
    pub course_id: EntityId,
    pub title: String,
    pub order: u32,
    pub duration_seconds: u32,
}

impl Lesson {
    pub fn new(course_id: EntityId, title: impl Into<String>, order: u32) -> Self {
        Self {
            id: EntityId::new(),
            course_id,
            title: title.into(),
            order,
            duration_seconds: 0,
        }
    }

    /// Sets the lesson duration.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = seconds;
        self
    }
}

/// The record a review is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRef {
    #[serde(rename = "subject_type")]
    pub kind: SubjectType,
    #[serde(rename = "subject_id")]
    pub id: EntityId,
}

impl SubjectRef {
    pub fn new(kind: SubjectType, id: EntityId) -> Self {
        Self { kind, id }
    }

    pub fn remedy(id: EntityId) -> Self {
        Self::new(SubjectType::Remedy, id)
    }

    pub fn course(id: EntityId) -> Self {
        Self::new(SubjectType::Course, id)
    }

    pub fn video(id: EntityId) -> Self {
        Self::new(SubjectType::Video, id)
    }
}

/// A user review of a remedy, course or video.
///
/// `rating` is kept as stored upstream; values outside 1..=5 may exist in
/// legacy data and are skipped by the projection layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    pub author_id: UserId,
    #[serde(flatten)]
    pub subject: SubjectRef,
    pub rating: u8,
    pub message: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        author_id: UserId,
        subject: SubjectRef,
        rating: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            author_id,
            subject,
            rating,
            message: message.into(),
            status: ReviewStatus::Published,
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }
}

/// Input for submitting a review through the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    #[serde(flatten)]
    pub subject: SubjectRef,
    pub rating: u8,
    #[serde(default)]
    pub message: String,
}

/// A like or dislike left by a user on a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub review_id: EntityId,
    pub user_id: UserId,
    pub kind: ReactionKind,
}

impl Reaction {
    pub fn new(review_id: EntityId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            review_id,
            user_id,
            kind,
        }
    }
}

/// A favorite marker. Presence in the store is the whole signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

impl Favorite {
    pub fn new(user_id: UserId, entity_type: EntityType, entity_id: EntityId) -> Self {
        Self {
            user_id,
            entity_type,
            entity_id,
        }
    }
}

/// A user's progress on one lesson of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub user_id: UserId,
    pub course_id: EntityId,
    pub lesson_id: EntityId,
    pub status: ProgressStatus,
}

impl LessonProgress {
    pub fn new(
        user_id: UserId,
        course_id: EntityId,
        lesson_id: EntityId,
        status: ProgressStatus,
    ) -> Self {
        Self {
            user_id,
            course_id,
            lesson_id,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_subject_is_flattened() {
        let subject = SubjectRef::remedy(EntityId::new());
        let review = Review::new(UserId::new(), subject, 4, "Soothing");
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["subject_type"], "remedy");
        assert_eq!(json["subject_id"], subject.id.to_string());
        assert_eq!(json["status"], "published");
    }

    #[test]
    fn new_review_accepts_missing_message() {
        let id = EntityId::new();
        let body = serde_json::json!({
            "subject_type": "course",
            "subject_id": id.to_string(),
            "rating": 5
        });
        let parsed: NewReview = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.subject, SubjectRef::course(id));
        assert!(parsed.message.is_empty());
    }
}
