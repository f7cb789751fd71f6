//! Review payload.

use catalog::{EntityId, ReviewStatus, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::reaction::{ReactionTally, ViewerReaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: EntityId,
    pub author_id: UserId,
    pub rating: u8,
    pub message: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub reactions: ReactionTally,
    pub user_reaction: ViewerReaction,
}
