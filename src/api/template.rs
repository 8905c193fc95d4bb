//! Template authoring and submission endpoints.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::TemplateMetrics;
use crate::template::{
    extract_variables, reconcile_variables, render_preview, validate_template, TemplateDraft,
    ValidatedTemplate, Variable,
};

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub template: ValidatedTemplate,
}

#[derive(Debug, Deserialize)]
pub struct VariablesRequest {
    /// Current body text
    pub body: String,

    /// Variables table before the edit
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Serialize)]
pub struct VariablesResponse {
    /// Distinct placeholder keys, numerically ascending
    pub keys: Vec<String>,

    /// Reconciled variables table
    pub variables: Vec<Variable>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub body: String,
    pub header: Option<String>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// POST /api/v1/templates/validate - Gate a draft for submission
#[tracing::instrument(
    name = "http.validate_template",
    skip(payload),
    fields(template_name = tracing::field::Empty, template_type = tracing::field::Empty)
)]
pub async fn validate_draft(
    payload: std::result::Result<Json<TemplateDraft>, JsonRejection>,
) -> Result<Json<ValidateResponse>> {
    let Json(draft) = payload?;

    let span = tracing::Span::current();
    span.record("template_name", draft.name.as_str());
    span.record("template_type", draft.template_type.as_str());

    match validate_template(&draft) {
        Ok(template) => {
            TemplateMetrics::record_accepted();
            tracing::info!(
                language = %template.language,
                category = %template.category,
                variables = template.variables.len(),
                "Template accepted"
            );
            Ok(Json(ValidateResponse {
                valid: true,
                template,
            }))
        }
        Err(e) => {
            TemplateMetrics::record_rejected(&e);
            Err(e.into())
        }
    }
}

/// POST /api/v1/templates/variables - Re-derive the variables table after a body edit
#[tracing::instrument(name = "http.sync_variables", skip(payload))]
pub async fn sync_draft_variables(
    payload: std::result::Result<Json<VariablesRequest>, JsonRejection>,
) -> Result<Json<VariablesResponse>> {
    let Json(request) = payload?;

    let keys = extract_variables(&request.body);
    let variables = reconcile_variables(&request.variables, &keys);

    TemplateMetrics::record_variable_sync();
    tracing::debug!(keys = keys.len(), "Variables synchronized");

    Ok(Json(VariablesResponse { keys, variables }))
}

/// POST /api/v1/templates/preview - Render body and header with example values
#[tracing::instrument(name = "http.preview_template", skip(payload))]
pub async fn preview_draft(
    payload: std::result::Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>> {
    let Json(request) = payload?;
    TemplateMetrics::record_preview();

    Ok(Json(PreviewResponse {
        body: render_preview(&request.body, &request.variables),
        header: request
            .header
            .as_deref()
            .map(|h| render_preview(h, &request.variables)),
    }))
}
