//! HTTP API for the command server.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::commands::PlanSource;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Recharge plans lookup
    pub plans: Arc<dyn PlanSource>,
    /// Where `GET /` redirects to
    pub homepage_url: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(plans: impl PlanSource + 'static, homepage_url: impl Into<Arc<str>>) -> Self {
        Self {
            plans: Arc::new(plans),
            homepage_url: homepage_url.into(),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route("/health", get(handlers::health))
        // `/<command>.<format>`, split apart by the handler
        .route("/:invocation", post(handlers::run_command))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
