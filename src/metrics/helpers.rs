//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{PREVIEWS_TOTAL, VALIDATIONS_TOTAL, VARIABLE_SYNCS_TOTAL};
use crate::template::ValidationError;

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording template metrics
pub struct TemplateMetrics;

impl TemplateMetrics {
    /// Record an accepted template
    pub fn record_accepted() {
        VALIDATIONS_TOTAL.with_label_values(&["accepted", ""]).inc();
    }

    /// Record a rejected template
    pub fn record_rejected(err: &ValidationError) {
        VALIDATIONS_TOTAL
            .with_label_values(&["rejected", err.code()])
            .inc();
    }

    pub fn record_variable_sync() {
        VARIABLE_SYNCS_TOTAL.inc();
    }

    pub fn record_preview() {
        PREVIEWS_TOTAL.inc();
    }
}
