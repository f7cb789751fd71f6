//! Content catalog model and persistence port.
//!
//! This crate owns the records the projection layer reads:
//! - [`Remedy`], [`Course`], [`Lesson`] and [`Video`] content entities
//! - [`Review`], [`Reaction`], [`Favorite`] and [`LessonProgress`] user records
//! - the [`ContentStore`] trait and an [`InMemoryContentStore`] implementation

pub mod entities;
pub mod error;
pub mod kinds;
pub mod memory;
pub mod store;

pub use common::{EntityId, UserId};
pub use entities::{
    Course, Favorite, Lesson, LessonProgress, NewReview, Reaction, Remedy, Review, SubjectRef,
    Video,
};
pub use error::{CatalogError, Result};
pub use kinds::{EntityType, ProgressStatus, ReactionKind, ReviewStatus, SubjectType};
pub use memory::InMemoryContentStore;
pub use store::ContentStore;
