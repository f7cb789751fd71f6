//! Shared types for the wellness content backend.

pub mod types;

pub use types::{EntityId, UserId};
