//! WhatsApp message template validation.
//!
//! This module provides:
//! - Placeholder extraction (`{{1}}`, `{{2}}`, ...) and variable reconciliation
//! - Per-type structural rules (quick-reply, list-picker, call-to-action, media)
//! - Full-record validation with deterministic first-failure reporting
//! - Preview rendering with example values
//!
//! Everything here is pure: no I/O, no shared state.
//!
//! # Example
//!
//! ```ignore
//! // Keep the variables table in sync while the author types
//! draft.variables = sync_variables(&draft.variables, &draft.body);
//!
//! // Gate submission
//! let template = validate_template(&draft)?;
//! ```

mod error;
mod preview;
mod schema;
mod structure;
mod types;
mod variables;

pub use error::{ValidationError, ValidationResult};
pub use preview::render_preview;
pub use schema::{
    validate_template, MAX_ACTION_TITLE_LENGTH, MAX_BODY_LENGTH, MAX_BUTTON_TITLE_LENGTH,
    MAX_FOOTER_LENGTH, MAX_HEADER_LENGTH, MAX_LIST_ITEM_DESCRIPTION_LENGTH,
    MAX_LIST_ITEM_TITLE_LENGTH, MAX_NAME_LENGTH,
};
pub use structure::{
    validate_structure, StructuralPayload, MAX_BUTTONS, MAX_LIST_ITEMS, MAX_PHONE_ACTIONS,
    MAX_URL_ACTIONS,
};
pub use types::{
    Action, ActionKind, Button, Category, Language, ListItem, ParseEnumError, TemplateDraft,
    TemplatePayload, TemplateType, ValidatedTemplate, Variable,
};
pub use variables::{extract_variables, reconcile_variables, sync_variables};
