//! Viewer reaction and like/dislike tallies on reviews.

use catalog::{EntityId, Reaction, ReactionKind};
use serde::{Serialize, Serializer};

use crate::viewer::Viewer;

/// The viewer's reaction to a review.
///
/// `None` covers both "guest" and "authenticated without a reaction"; the
/// two are indistinguishable here and callers must not treat `None` as a
/// signal that the viewer is logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerReaction {
    Liked,
    Disliked,
    #[default]
    None,
}

impl Serialize for ViewerReaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ViewerReaction::Liked => serializer.serialize_some("like"),
            ViewerReaction::Disliked => serializer.serialize_some("dislike"),
            ViewerReaction::None => serializer.serialize_none(),
        }
    }
}

impl From<ReactionKind> for ViewerReaction {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => ViewerReaction::Liked,
            ReactionKind::Dislike => ViewerReaction::Disliked,
        }
    }
}

/// Resolves the viewer's reaction from an already-fetched reaction set.
///
/// `reactions` should belong to a single review. Uniqueness per user is
/// enforced upstream; if it was violated, the first matching record in
/// slice order wins.
pub fn resolve(viewer: &Viewer, reactions: &[Reaction]) -> ViewerReaction {
    let Some(user_id) = viewer.user_id() else {
        return ViewerReaction::None;
    };

    reactions
        .iter()
        .find(|r| r.user_id == user_id)
        .map(|r| ViewerReaction::from(r.kind))
        .unwrap_or_default()
}

/// Like and dislike counts of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionTally {
    pub likes_count: u64,
    pub dislikes_count: u64,
}

/// Counts the likes and dislikes in `reactions`.
pub fn tally(reactions: &[Reaction]) -> ReactionTally {
    reactions
        .iter()
        .fold(ReactionTally::default(), |mut acc, r| {
            match r.kind {
                ReactionKind::Like => acc.likes_count += 1,
                ReactionKind::Dislike => acc.dislikes_count += 1,
            }
            acc
        })
}

/// Returns the reactions attached to `review_id`, in input order.
pub fn for_review(reactions: &[Reaction], review_id: EntityId) -> Vec<Reaction> {
    reactions
        .iter()
        .filter(|r| r.review_id == review_id)
        .copied()
        .collect()
}
