use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::middleware::api_key_auth;
use crate::server::AppState;

use super::health::health;
use super::metrics::prometheus_metrics;
use super::template::{preview_draft, sync_draft_variables, validate_draft};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Template endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/templates/validate", post(validate_draft))
                .route("/templates/variables", post(sync_draft_variables))
                .route("/templates/preview", post(preview_draft))
                .route_layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
}
