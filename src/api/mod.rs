//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod routes;
mod template;

pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{
    preview_draft, sync_draft_variables, validate_draft, PreviewRequest, PreviewResponse,
    ValidateResponse, VariablesRequest, VariablesResponse,
};
