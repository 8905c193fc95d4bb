//! Template types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// A string that is not a member of one of the closed sets below
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Supported template locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "es")]
    Es,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::PtBr => "pt_BR",
            Language::EnUs => "en_US",
            Language::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt_BR" => Ok(Language::PtBr),
            "en_US" => Ok(Language::EnUs),
            "es" => Ok(Language::Es),
            _ => Err(ParseEnumError::new("language", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval category, opaque to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Utility,
    Marketing,
    Authentication,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Utility => "UTILITY",
            Category::Marketing => "MARKETING",
            Category::Authentication => "AUTHENTICATION",
        }
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UTILITY" => Ok(Category::Utility),
            "MARKETING" => Ok(Category::Marketing),
            "AUTHENTICATION" => Ok(Category::Authentication),
            _ => Err(ParseEnumError::new("category", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural shape of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    Text,
    QuickReply,
    ListPicker,
    CallToAction,
    Media,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Text => "text",
            TemplateType::QuickReply => "quick-reply",
            TemplateType::ListPicker => "list-picker",
            TemplateType::CallToAction => "call-to-action",
            TemplateType::Media => "media",
        }
    }
}

impl FromStr for TemplateType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TemplateType::Text),
            "quick-reply" => Ok(TemplateType::QuickReply),
            "list-picker" => Ok(TemplateType::ListPicker),
            "call-to-action" => Ok(TemplateType::CallToAction),
            "media" => Ok(TemplateType::Media),
            _ => Err(ParseEnumError::new("template type", s)),
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of call-to-action entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Url,
    Phone,
    CopyCode,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Url => "url",
            ActionKind::Phone => "phone",
            ActionKind::CopyCode => "copy_code",
        }
    }
}

impl FromStr for ActionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(ActionKind::Url),
            "phone" => Ok(ActionKind::Phone),
            "copy_code" => Ok(ActionKind::CopyCode),
            _ => Err(ParseEnumError::new("action type", s)),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positional variable derived from a `{{n}}` placeholder in the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Literal digit span of the placeholder, e.g. `"1"`
    pub key: String,

    /// Author-facing label
    #[serde(default)]
    pub name: String,

    /// Sample value submitted for approval and used in previews
    #[serde(default)]
    pub example: String,
}

impl Variable {
    /// Create a variable with no name or example yet
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: String::new(),
            example: String::new(),
        }
    }
}

/// Quick-reply button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub id: String,
    pub title: String,
}

/// Call-to-action entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// List-picker item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A template as edited by the authoring UI.
///
/// Closed sets are kept as raw strings since drafts arrive from untyped
/// boundaries; [`validate_template`](super::validate_template) checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub language: String,
    pub category: String,
    pub template_type: String,
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Derived from `body`, kept in sync by the caller
    #[serde(default)]
    pub variables: Vec<Variable>,

    #[serde(default)]
    pub buttons: Vec<Button>,

    #[serde(default)]
    pub actions: Vec<Action>,

    #[serde(default)]
    pub list_items: Vec<ListItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Structural payload relevant to the declared template type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplatePayload {
    Text,
    QuickReply { buttons: Vec<Button> },
    ListPicker { items: Vec<ListItem> },
    CallToAction { actions: Vec<Action> },
    Media { url: Url },
}

impl TemplatePayload {
    pub fn template_type(&self) -> TemplateType {
        match self {
            TemplatePayload::Text => TemplateType::Text,
            TemplatePayload::QuickReply { .. } => TemplateType::QuickReply,
            TemplatePayload::ListPicker { .. } => TemplateType::ListPicker,
            TemplatePayload::CallToAction { .. } => TemplateType::CallToAction,
            TemplatePayload::Media { .. } => TemplateType::Media,
        }
    }
}

/// A draft that passed validation and is eligible for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedTemplate {
    pub name: String,
    pub language: Language,
    pub category: Category,
    pub body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// One entry per distinct placeholder in `body`, ascending
    pub variables: Vec<Variable>,

    pub payload: TemplatePayload,
}

impl ValidatedTemplate {
    pub fn template_type(&self) -> TemplateType {
        self.payload.template_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_type_round_trips_through_str() {
        for ty in [
            TemplateType::Text,
            TemplateType::QuickReply,
            TemplateType::ListPicker,
            TemplateType::CallToAction,
            TemplateType::Media,
        ] {
            assert_eq!(ty.as_str().parse::<TemplateType>(), Ok(ty));
        }
        assert!("carousel".parse::<TemplateType>().is_err());
    }

    #[test]
    fn test_display_matches_serde_form() {
        assert_eq!(Language::EnUs.to_string(), "en_US");
        assert_eq!(Category::Authentication.to_string(), "AUTHENTICATION");
        assert_eq!(TemplateType::ListPicker.to_string(), "list-picker");
        assert_eq!(ActionKind::CopyCode.to_string(), "copy_code");

        for lang in [Language::PtBr, Language::EnUs, Language::Es] {
            assert_eq!(
                serde_json::to_string(&lang).unwrap(),
                format!("\"{}\"", lang)
            );
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_parse_error_names_rejected_value() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.kind, "language");
        assert_eq!(err.value, "fr");
        assert_eq!(err.to_string(), "Unknown language: \"fr\"");

        assert_eq!(
            "utility".parse::<Category>(),
            Err(ParseEnumError {
                kind: "category",
                value: "utility".to_string()
            })
        );
        assert_eq!("phone".parse::<ActionKind>(), Ok(ActionKind::Phone));
        assert!("sms".parse::<ActionKind>().is_err());
    }

    #[test]
    fn test_enum_serde_forms() {
        assert_eq!(
            serde_json::to_string(&TemplateType::CallToAction).unwrap(),
            "\"call-to-action\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Marketing).unwrap(),
            "\"MARKETING\""
        );
        assert_eq!(serde_json::to_string(&Language::PtBr).unwrap(), "\"pt_BR\"");
        assert_eq!(
            serde_json::to_string(&ActionKind::CopyCode).unwrap(),
            "\"copy_code\""
        );
    }

    #[test]
    fn test_draft_deserializes_with_defaults() {
        let draft: TemplateDraft = serde_json::from_str(
            r#"{
                "name": "welcome",
                "language": "pt_BR",
                "category": "UTILITY",
                "template_type": "text",
                "body": "Olá {{1}}"
            }"#,
        )
        .unwrap();

        assert!(draft.variables.is_empty());
        assert!(draft.buttons.is_empty());
        assert_eq!(draft.header, None);
        assert_eq!(draft.media_url, None);
    }

    #[test]
    fn test_action_type_field() {
        let action: Action =
            serde_json::from_str(r#"{"type": "url", "title": "Site", "value": "https://a.b"}"#)
                .unwrap();
        assert_eq!(action.kind, ActionKind::Url);
        assert_eq!(action.value.as_deref(), Some("https://a.b"));
    }
}
