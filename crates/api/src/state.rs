//! Shared application state.

use catalog::ContentStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ContentStore> {
    pub store: S,
}

impl<S: ContentStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}
