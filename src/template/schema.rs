//! Full-record validation, run before a template is submitted for approval

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::error::{ValidationError, ValidationResult};
use super::structure::validate_structure;
use super::types::{
    Category, Language, ParseEnumError, TemplateDraft, TemplatePayload, TemplateType,
    ValidatedTemplate,
};
use super::variables::{extract_variables, numeric_form, reconcile_variables};

pub const MAX_NAME_LENGTH: usize = 512;
pub const MAX_BODY_LENGTH: usize = 1024;
pub const MAX_HEADER_LENGTH: usize = 60;
pub const MAX_FOOTER_LENGTH: usize = 60;
pub const MAX_BUTTON_TITLE_LENGTH: usize = 20;
pub const MAX_ACTION_TITLE_LENGTH: usize = 25;
pub const MAX_LIST_ITEM_TITLE_LENGTH: usize = 24;
pub const MAX_LIST_ITEM_DESCRIPTION_LENGTH: usize = 72;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

    /// Two placeholders separated by nothing but whitespace
    static ref ADJACENT_RE: Regex =
        Regex::new(r"\{\{[0-9]+\}\}\s*\{\{[0-9]+\}\}").unwrap();
}

/// Validate a complete draft.
///
/// Rules run in a fixed order and the first violation is returned, so the
/// same invalid draft always yields the same rejection:
///
/// 1. name pattern and length
/// 2. language, then category
/// 3. template type
/// 4. body length
/// 5. placeholders numbered `1..k` without gaps
/// 6. no two placeholders separated only by whitespace
/// 7. header and footer length
/// 8. structural cardinality for the template type
/// 9. button, action and list item field lengths
/// 10. media URL for media templates
///
/// Variables are re-derived from the body; the draft's own `variables` only
/// contribute names and examples to the result.
pub fn validate_template(draft: &TemplateDraft) -> ValidationResult<ValidatedTemplate> {
    validate_name(&draft.name)?;

    let language: Language = parse_enum("language", &draft.language)?;
    let category: Category = parse_enum("category", &draft.category)?;
    let template_type: TemplateType = parse_enum("template_type", &draft.template_type)?;

    validate_body_length(&draft.body)?;

    let keys = extract_variables(&draft.body);
    validate_sequential(&keys)?;
    validate_separated(&draft.body)?;

    check_length("header", draft.header.as_deref(), 0, MAX_HEADER_LENGTH)?;
    check_length("footer", draft.footer.as_deref(), 0, MAX_FOOTER_LENGTH)?;

    validate_structure(template_type, draft.into())?;
    validate_entry_lengths(draft)?;

    let payload = build_payload(template_type, draft)?;

    Ok(ValidatedTemplate {
        name: draft.name.clone(),
        language,
        category,
        body: draft.body.clone(),
        header: draft.header.clone(),
        footer: draft.footer.clone(),
        variables: reconcile_variables(&draft.variables, &keys),
        payload,
    })
}

fn validate_name(name: &str) -> ValidationResult<()> {
    let length = name.chars().count();

    if length == 0 {
        return Err(ValidationError::InvalidName("name is required".to_string()));
    }

    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::InvalidName(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }

    if !NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidName(
            "name must start with a lowercase letter and contain only lowercase letters, digits or underscores"
                .to_string(),
        ));
    }

    Ok(())
}

fn parse_enum<T: FromStr<Err = ParseEnumError>>(
    field: &'static str,
    value: &str,
) -> ValidationResult<T> {
    value
        .parse()
        .map_err(|e: ParseEnumError| ValidationError::InvalidEnumValue {
            field,
            value: e.value,
        })
}

fn validate_body_length(body: &str) -> ValidationResult<()> {
    let length = body.chars().count();

    if length == 0 {
        return Err(ValidationError::BodyEmpty);
    }

    if length > MAX_BODY_LENGTH {
        return Err(ValidationError::BodyLengthExceeded {
            length,
            max: MAX_BODY_LENGTH,
        });
    }

    Ok(())
}

/// `keys` must be sorted by [`extract_variables`]; repeated numeric values
/// (`{{1}}` and `{{01}}`) count once. The first value that breaks the run is
/// reported alongside the one expected in its place.
fn validate_sequential(keys: &[String]) -> ValidationResult<()> {
    let mut values: Vec<&str> = keys.iter().map(|k| numeric_form(k)).collect();
    values.dedup();

    for (index, value) in values.iter().enumerate() {
        let expected = index as u64 + 1;
        if *value != expected.to_string() {
            return Err(ValidationError::NonSequentialVariables {
                expected,
                found: value.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_separated(body: &str) -> ValidationResult<()> {
    match ADJACENT_RE.find(body) {
        Some(m) => Err(ValidationError::AdjacentVariables {
            snippet: m.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

fn check_length(
    field: impl Into<String>,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };

    let length = value.chars().count();
    if length < min || length > max {
        return Err(ValidationError::FieldLengthExceeded {
            field: field.into(),
            length,
            min,
            max,
        });
    }

    Ok(())
}

fn validate_entry_lengths(draft: &TemplateDraft) -> ValidationResult<()> {
    for (i, button) in draft.buttons.iter().enumerate() {
        check_length(
            format!("buttons[{}].title", i),
            Some(&button.title),
            1,
            MAX_BUTTON_TITLE_LENGTH,
        )?;
    }

    for (i, action) in draft.actions.iter().enumerate() {
        check_length(
            format!("actions[{}].title", i),
            Some(&action.title),
            1,
            MAX_ACTION_TITLE_LENGTH,
        )?;
    }

    for (i, item) in draft.list_items.iter().enumerate() {
        check_length(
            format!("list_items[{}].title", i),
            Some(&item.title),
            1,
            MAX_LIST_ITEM_TITLE_LENGTH,
        )?;
        check_length(
            format!("list_items[{}].description", i),
            item.description.as_deref(),
            0,
            MAX_LIST_ITEM_DESCRIPTION_LENGTH,
        )?;
    }

    Ok(())
}

fn build_payload(
    template_type: TemplateType,
    draft: &TemplateDraft,
) -> ValidationResult<TemplatePayload> {
    let payload = match template_type {
        TemplateType::Text => TemplatePayload::Text,
        TemplateType::QuickReply => TemplatePayload::QuickReply {
            buttons: draft.buttons.clone(),
        },
        TemplateType::ListPicker => TemplatePayload::ListPicker {
            items: draft.list_items.clone(),
        },
        TemplateType::CallToAction => TemplatePayload::CallToAction {
            actions: draft.actions.clone(),
        },
        TemplateType::Media => {
            let raw = draft.media_url.as_deref().ok_or_else(|| {
                ValidationError::InvalidMediaUrl(
                    "media_url is required for media templates".to_string(),
                )
            })?;
            let url = Url::parse(raw)
                .map_err(|e| ValidationError::InvalidMediaUrl(format!("{:?}: {}", raw, e)))?;
            TemplatePayload::Media { url }
        }
    };

    Ok(payload)
}
