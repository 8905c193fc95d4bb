//! Per-type structural cardinality rules

use super::error::{ValidationError, ValidationResult};
use super::types::{Action, ActionKind, Button, ListItem, TemplateDraft, TemplateType};

/// Maximum quick-reply buttons
pub const MAX_BUTTONS: usize = 10;
/// Maximum list-picker items
pub const MAX_LIST_ITEMS: usize = 10;
/// Maximum `url` call-to-action entries
pub const MAX_URL_ACTIONS: usize = 2;
/// Maximum `phone` call-to-action entries
pub const MAX_PHONE_ACTIONS: usize = 1;

/// Borrowed view of a draft's structural entries
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralPayload<'a> {
    pub buttons: &'a [Button],
    pub actions: &'a [Action],
    pub list_items: &'a [ListItem],
}

impl<'a> From<&'a TemplateDraft> for StructuralPayload<'a> {
    fn from(draft: &'a TemplateDraft) -> Self {
        Self {
            buttons: &draft.buttons,
            actions: &draft.actions,
            list_items: &draft.list_items,
        }
    }
}

/// Check the cardinality rules of `template_type` against `payload`.
///
/// Only entries relevant to the type are inspected. Field lengths are not
/// checked here.
pub fn validate_structure(
    template_type: TemplateType,
    payload: StructuralPayload<'_>,
) -> ValidationResult<()> {
    match template_type {
        TemplateType::QuickReply => at_most(
            ("buttons", "buttons"),
            payload.buttons.len(),
            MAX_BUTTONS,
        ),
        TemplateType::ListPicker => at_most(
            ("list_items", "list items"),
            payload.list_items.len(),
            MAX_LIST_ITEMS,
        ),
        TemplateType::CallToAction => {
            let count = |kind: ActionKind| payload.actions.iter().filter(|a| a.kind == kind).count();

            at_most(
                ("actions", "url actions"),
                count(ActionKind::Url),
                MAX_URL_ACTIONS,
            )?;
            at_most(
                ("actions", "phone actions"),
                count(ActionKind::Phone),
                MAX_PHONE_ACTIONS,
            )
        }
        TemplateType::Text | TemplateType::Media => Ok(()),
    }
}

fn at_most(
    (field, label): (&'static str, &'static str),
    count: usize,
    max: usize,
) -> ValidationResult<()> {
    if count > max {
        return Err(ValidationError::StructuralCardinalityExceeded {
            field,
            label,
            count,
            max,
        });
    }
    Ok(())
}
