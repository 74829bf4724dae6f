use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{self, AppState};

/// Builds the HTTP router over the given application state.
///
/// Shared by `main` and the integration tests so both serve exactly the
/// same surface.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/leads", get(handlers::list_leads).post(handlers::create_lead))
        .route("/leads/:id", get(handlers::get_lead))
        .route("/leads/:id/enrich", post(handlers::enrich_lead))
        .route("/leads/:id/score", post(handlers::score_lead))
        .route("/filters/options", get(handlers::filter_options))
        .layer(
            // Request size limit: 1MB max payload
            ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
