//! Response payloads produced by the [`ViewAssembler`](crate::ViewAssembler).
//!
//! Field names are part of the public API contract.

pub mod course;
pub mod lesson;
pub mod remedy;
pub mod review;
pub mod video;

pub use course::CourseDetailView;
pub use lesson::LessonView;
pub use remedy::RemedyView;
pub use review::ReviewView;
pub use video::VideoView;
