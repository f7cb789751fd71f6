//! HTTP API server for the wellness content backend.
//!
//! Serves remedies, courses and videos as viewer-aware payloads, accepts
//! reviews, reactions, favorites and lesson progress, and exposes
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod demo;
pub mod error;
pub mod identity;
pub mod loader;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use catalog::ContentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ContentStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::ops::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::ops::health::<S>))
        .route("/remedies", get(routes::remedies::list::<S>))
        .route("/remedies/{id}", get(routes::remedies::get::<S>))
        .route("/courses", get(routes::courses::list::<S>))
        .route("/courses/{id}", get(routes::courses::get::<S>))
        .route("/videos/{id}", get(routes::videos::get::<S>))
        .route(
            "/reviews",
            get(routes::reviews::list::<S>).post(routes::reviews::create::<S>),
        )
        .route("/reviews/{id}/reactions", post(routes::reviews::react::<S>))
        .route("/favorites", post(routes::favorites::toggle::<S>))
        .route(
            "/lessons/{id}/progress",
            put(routes::lessons::update_progress::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a content store in shared application state.
pub fn create_default_state<S: ContentStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
