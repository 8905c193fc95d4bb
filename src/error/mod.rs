use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::template::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request refused before its body was decoded (size, content type)
    #[error("Request rejected: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Bodies that do not decode into the request type are all 400,
            // including data errors axum would answer with 422
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                AppError::BadRequest(rejection.body_text())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

fn rejection_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        _ => "BAD_REQUEST",
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            // Unknown template types mean the caller is out of date, not that
            // the author typed something wrong
            AppError::Validation(e) if e.is_caller_fault() => {
                tracing::error!(code = %e.code(), message = %e, "Caller sent unsupported template type");
                (StatusCode::BAD_REQUEST, e.code(), e.to_string(), Some(e.field()))
            }
            AppError::Validation(e) => {
                tracing::debug!(code = %e.code(), field = %e.field(), "Template rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    e.code(),
                    e.to_string(),
                    Some(e.field()),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Malformed request");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::Unauthorized(msg) => {
                tracing::warn!(message = %msg, "Rejected unauthenticated request");
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
            }
            AppError::Rejected { status, message } => {
                tracing::warn!(status = %status, message = %message, "Request rejected");
                (*status, rejection_code(*status), message.clone(), None)
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
