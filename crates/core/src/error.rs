//! Binder error model.

use thiserror::Error;

/// Failure to turn a raw payload into field/value pairs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The declared content type is not one the binder understands.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The payload could not be parsed in the declared format.
    #[error("malformed {format} payload: {message}")]
    Malformed {
        format: &'static str,
        message: String,
    },

    /// The payload parsed, but is not a flat set of named fields.
    #[error("payload is not a field map")]
    NotAnObject,
}

impl DecodeError {
    pub fn malformed(format: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            message: message.into(),
        }
    }
}

/// Why a single candidate schema failed to bind.
///
/// These never escape negotiation: a failing candidate is discarded whole and
/// the cascade advances to the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A required field is absent from the payload.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A required field is present but carries its format's empty value.
    #[error("required field `{0}` is empty")]
    EmptyField(String),

    /// A field's value does not satisfy its declared type.
    #[error("field `{field}` is not a valid {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// A named validation rule rejected the field.
    #[error("field `{field}` failed rule `{rule}`")]
    RuleFailed { field: String, rule: String },

    /// A schema references a rule that is not in the registry.
    #[error("unknown validation rule `{0}`")]
    UnknownRule(String),
}
