use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::api::api_routes;

use super::AppState;

pub fn create_app(state: AppState) -> Router {
    let server = &state.settings.server;

    // CORS configuration, any origin unless restricted
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = RequestBodyLimitLayer::new(server.max_body_bytes);

    Router::new()
        .merge(api_routes(state.clone()))
        // Add middleware
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Add state
        .with_state(state)
}
