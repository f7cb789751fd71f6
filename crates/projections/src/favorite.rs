//! Favorite membership checks.

use std::collections::HashSet;

use catalog::{EntityId, EntityType, Favorite};
use common::UserId;

use crate::viewer::Viewer;

/// A set of favorites that can answer membership queries.
pub trait FavoriteLookup: Send + Sync {
    /// Returns true if the exact `(user, type, id)` triple is present.
    fn contains(&self, user_id: UserId, entity_type: EntityType, entity_id: EntityId) -> bool;
}

impl FavoriteLookup for [Favorite] {
    fn contains(&self, user_id: UserId, entity_type: EntityType, entity_id: EntityId) -> bool {
        self.iter().any(|f| {
            f.user_id == user_id && f.entity_type == entity_type && f.entity_id == entity_id
        })
    }
}

impl FavoriteLookup for Vec<Favorite> {
    fn contains(&self, user_id: UserId, entity_type: EntityType, entity_id: EntityId) -> bool {
        FavoriteLookup::contains(self.as_slice(), user_id, entity_type, entity_id)
    }
}

impl FavoriteLookup for HashSet<Favorite> {
    fn contains(&self, user_id: UserId, entity_type: EntityType, entity_id: EntityId) -> bool {
        HashSet::contains(self, &Favorite::new(user_id, entity_type, entity_id))
    }
}

/// Returns whether the viewer has marked the entity as favorite.
///
/// Guests never have favorites, whatever `favorites` holds.
pub fn is_favorite<L: FavoriteLookup + ?Sized>(
    viewer: &Viewer,
    entity_type: EntityType,
    entity_id: EntityId,
    favorites: &L,
) -> bool {
    match viewer.user_id() {
        Some(user_id) => favorites.contains(user_id, entity_type, entity_id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_is_never_favorite() {
        let id = EntityId::new();
        let favorites = vec![Favorite::new(UserId::new(), EntityType::Remedy, id)];
        assert!(!is_favorite(&Viewer::Guest, EntityType::Remedy, id, &favorites));
    }

    #[test]
    fn exact_triple_matches() {
        let user = UserId::new();
        let id = EntityId::new();
        let favorites = vec![Favorite::new(user, EntityType::Course, id)];
        let viewer = Viewer::User(user);

        assert!(is_favorite(&viewer, EntityType::Course, id, &favorites));
        assert!(!is_favorite(&viewer, EntityType::Video, id, &favorites));
        assert!(!is_favorite(&viewer, EntityType::Course, EntityId::new(), &favorites));
        assert!(!is_favorite(&Viewer::User(UserId::new()), EntityType::Course, id, &favorites));
    }

    #[test]
    fn hash_set_lookup_agrees_with_slice() {
        let user = UserId::new();
        let id = EntityId::new();
        let list = vec![Favorite::new(user, EntityType::Article, id)];
        let set: HashSet<Favorite> = list.iter().copied().collect();
        let viewer = Viewer::User(user);

        assert_eq!(
            is_favorite(&viewer, EntityType::Article, id, &list),
            is_favorite(&viewer, EntityType::Article, id, &set)
        );
        assert!(is_favorite(&viewer, EntityType::Article, id, &set));
    }

    #[test]
    fn lookup_is_idempotent() {
        let user = UserId::new();
        let id = EntityId::new();
        let favorites = vec![Favorite::new(user, EntityType::Remedy, id)];
        let viewer = Viewer::User(user);

        let first = is_favorite(&viewer, EntityType::Remedy, id, &favorites);
        let second = is_favorite(&viewer, EntityType::Remedy, id, &favorites);
        assert_eq!(first, second);
        assert_eq!(favorites.len(), 1);
    }
}
