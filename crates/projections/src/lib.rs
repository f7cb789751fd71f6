//! Read-model projections for API responses.
//!
//! Every projection here is a pure, synchronous computation over records
//! already loaded by a [`catalog::ContentStore`]:
//! - [`rating`] averages review ratings
//! - [`favorite`] answers "is this a favorite of the viewer"
//! - [`reaction`] resolves the viewer's like/dislike on a review
//! - [`progress`] derives course completion and the lesson to resume
//! - [`ViewAssembler`] composes them into the response payloads in [`views`]
//!
//! Missing data is never an error: absent relations, guests and empty
//! collections all map to zero/default values.

pub mod assembler;
pub mod favorite;
pub mod field;
pub mod progress;
pub mod rating;
pub mod reaction;
pub mod viewer;
pub mod views;

pub use assembler::{Relations, ViewAssembler};
pub use favorite::FavoriteLookup;
pub use field::Field;
pub use progress::CourseProgress;
pub use rating::RatingSummary;
pub use reaction::{ReactionTally, ViewerReaction};
pub use viewer::Viewer;
pub use views::{CourseDetailView, LessonView, RemedyView, ReviewView, VideoView};
