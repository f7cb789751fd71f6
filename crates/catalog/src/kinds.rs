//! Enumerated tags carried by catalog records.

use serde::{Deserialize, Serialize};

/// Kind of record a review is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Remedy,
    Course,
    Video,
}

impl SubjectType {
    /// Returns the wire name of the subject type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Remedy => "remedy",
            SubjectType::Course => "course",
            SubjectType::Video => "video",
        }
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SubjectType> for EntityType {
    fn from(subject: SubjectType) -> Self {
        match subject {
            SubjectType::Remedy => EntityType::Remedy,
            SubjectType::Course => EntityType::Course,
            SubjectType::Video => EntityType::Video,
        }
    }
}

/// Kind of record a user can mark as favorite.
///
/// Superset of [`SubjectType`]: articles can be favorited but not reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Remedy,
    Course,
    Video,
    Article,
}

impl EntityType {
    /// Returns the wire name of the entity type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Remedy => "remedy",
            EntityType::Course => "course",
            EntityType::Video => "video",
            EntityType::Article => "article",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's reaction to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Moderation state of a review. Only published reviews appear in public views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    #[default]
    Published,
    Rejected,
}

impl ReviewStatus {
    /// Returns true if the review is visible to other users.
    pub fn is_public(&self) -> bool {
        matches!(self, ReviewStatus::Published)
    }
}

/// A user's progress through a single lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// Returns true once the user has opened the lesson at least once.
    pub fn is_started(&self) -> bool {
        matches!(self, ProgressStatus::InProgress | ProgressStatus::Completed)
    }
}
