//! Template validation rejections

use thiserror::Error;

/// Reason a template draft was rejected.
///
/// Every variant is an expected, user-actionable outcome and is returned as a
/// value. The only exception is an unknown `template_type`, see
/// [`ValidationError::is_caller_fault`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid template name: {0}")]
    InvalidName(String),

    #[error("Invalid {field} value: {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("Body must not be empty")]
    BodyEmpty,

    #[error("Body is {length} characters long, maximum is {max}")]
    BodyLengthExceeded { length: usize, max: usize },

    #[error(
        "Variables must be numbered sequentially from 1, expected {{{{{expected}}}}} but found {{{{{found}}}}}"
    )]
    NonSequentialVariables { expected: u64, found: String },

    #[error("Variables must be separated by text: {snippet:?}")]
    AdjacentVariables { snippet: String },

    #[error("{field} must be between {min} and {max} characters, got {length}")]
    FieldLengthExceeded {
        field: String,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Too many {label}: {count} given, at most {max} allowed")]
    StructuralCardinalityExceeded {
        field: &'static str,
        label: &'static str,
        count: usize,
        max: usize,
    },

    #[error("Invalid media URL: {0}")]
    InvalidMediaUrl(String),
}

/// Result type for template validation
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Stable machine-readable identifier
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidName(_) => "INVALID_NAME",
            ValidationError::InvalidEnumValue { .. } if self.is_caller_fault() => {
                "UNSUPPORTED_TEMPLATE_TYPE"
            }
            ValidationError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            ValidationError::BodyEmpty => "BODY_EMPTY",
            ValidationError::BodyLengthExceeded { .. } => "BODY_LENGTH_EXCEEDED",
            ValidationError::NonSequentialVariables { .. } => "NON_SEQUENTIAL_VARIABLES",
            ValidationError::AdjacentVariables { .. } => "ADJACENT_VARIABLES",
            ValidationError::FieldLengthExceeded { .. } => "FIELD_LENGTH_EXCEEDED",
            ValidationError::StructuralCardinalityExceeded { .. } => {
                "STRUCTURAL_CARDINALITY_EXCEEDED"
            }
            ValidationError::InvalidMediaUrl(_) => "INVALID_MEDIA_URL",
        }
    }

    /// Path of the offending field in the draft record, e.g. `buttons[2].title`
    pub fn field(&self) -> String {
        match self {
            ValidationError::InvalidName(_) => "name".to_string(),
            ValidationError::InvalidEnumValue { field, .. } => field.to_string(),
            ValidationError::BodyEmpty
            | ValidationError::BodyLengthExceeded { .. }
            | ValidationError::NonSequentialVariables { .. }
            | ValidationError::AdjacentVariables { .. } => "body".to_string(),
            ValidationError::FieldLengthExceeded { field, .. } => field.clone(),
            ValidationError::StructuralCardinalityExceeded { field, .. } => field.to_string(),
            ValidationError::InvalidMediaUrl(_) => "media_url".to_string(),
        }
    }

    /// True when the rejection points at a bug in the caller rather than at
    /// something the template author typed.
    ///
    /// Callers are expected to restrict `template_type` to the known set, so
    /// an unknown value means the authoring layer is out of date.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidEnumValue {
                field: "template_type",
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_paths() {
        let err = ValidationError::FieldLengthExceeded {
            field: "buttons[2].title".to_string(),
            length: 21,
            min: 1,
            max: 20,
        };
        assert_eq!(err.field(), "buttons[2].title");
        assert_eq!(err.code(), "FIELD_LENGTH_EXCEEDED");
        assert_eq!(ValidationError::BodyEmpty.field(), "body");
    }

    #[test]
    fn test_unknown_template_type_is_caller_fault() {
        let err = ValidationError::InvalidEnumValue {
            field: "template_type",
            value: "carousel".to_string(),
        };
        assert!(err.is_caller_fault());
        assert_eq!(err.code(), "UNSUPPORTED_TEMPLATE_TYPE");

        let err = ValidationError::InvalidEnumValue {
            field: "category",
            value: "PROMO".to_string(),
        };
        assert!(!err.is_caller_fault());
        assert_eq!(err.code(), "INVALID_ENUM_VALUE");
    }

    #[test]
    fn test_non_sequential_message() {
        let err = ValidationError::NonSequentialVariables {
            expected: 2,
            found: "3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Variables must be numbered sequentially from 1, expected {{2}} but found {{3}}"
        );

        let err = ValidationError::NonSequentialVariables {
            expected: 1,
            found: "0".to_string(),
        };
        assert!(err.to_string().ends_with("found {{0}}"));
    }
}
