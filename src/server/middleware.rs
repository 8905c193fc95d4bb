use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::AppError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Require `X-API-Key` to match `api.key` when one is configured
pub async fn api_key_auth(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let Some(expected_key) = state.settings.api.key.as_deref() else {
        return next.run(req).await;
    };

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected_key => next.run(req).await,
        Some(_) => AppError::Unauthorized("Invalid API key".to_string()).into_response(),
        None => AppError::Unauthorized("Missing X-API-Key header".to_string()).into_response(),
    }
}
