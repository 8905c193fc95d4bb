//! Prometheus metrics for the template service.
//!
//! - Validation outcomes by rejection code
//! - Variable sync and preview request counts

mod helpers;

pub use helpers::{encode_metrics, TemplateMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "templates";

lazy_static! {
    /// Validations by outcome (`accepted`/`rejected`) and rejection code
    pub static ref VALIDATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_validations_total", METRIC_PREFIX),
        "Total template validations",
        &["outcome", "code"]
    ).unwrap();

    /// Variable sync requests
    pub static ref VARIABLE_SYNCS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_variable_syncs_total", METRIC_PREFIX),
        "Total variable extraction and reconciliation requests"
    ).unwrap();

    /// Preview renders
    pub static ref PREVIEWS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_previews_total", METRIC_PREFIX),
        "Total template preview renders"
    ).unwrap();
}
