//! Shared field-level validation for inbound payloads.
//!
//! Validators receive the raw JSON object and collect every violation
//! instead of stopping at the first one, so clients see the complete list of
//! problems in a single round trip. Each helper pushes a [`FieldViolation`]
//! on failure and returns the extracted value on success.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::ValidateEmail;

/// Maximum length accepted for bounded string fields, in characters.
pub const MAX_FIELD_CHARS: usize = 255;

/// Stable machine-readable code identifying the violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field is absent or JSON `null`.
    MissingField,
    /// The field is present but is not a JSON string.
    NotAString,
    /// The string exceeds the maximum allowed length.
    TooLong,
    /// The field is present but is not an integral JSON number.
    NotAnInteger,
    /// The field cannot be interpreted as a boolean.
    NotABoolean,
    /// The string is not a syntactically valid email address.
    InvalidEmail,
}

/// A single field-level validation failure.
///
/// Serialises as one entry of the `validationErrors` response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = "title")]
    field: String,
    code: ViolationCode,
    #[schema(example = "missing required field: title")]
    message: String,
}

impl FieldViolation {
    /// Build a violation for the given field and rule.
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// Name of the offending payload field.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Machine-readable rule identifier.
    pub fn code(&self) -> ViolationCode {
        self.code
    }

    /// Human-readable explanation.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

fn missing(field: &'static str) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationCode::MissingField,
        format!("missing required field: {field}"),
    )
}

/// Fetch a required field, treating absent and `null` alike.
fn required<'a>(
    payload: &'a Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a Value> {
    match payload.get(field) {
        None | Some(Value::Null) => {
            violations.push(missing(field));
            None
        }
        Some(value) => Some(value),
    }
}

/// Extract a required string field without a length bound.
pub(crate) fn require_string(
    payload: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = required(payload, field, violations)?;
    match value.as_str() {
        Some(text) => Some(text.to_owned()),
        None => {
            violations.push(FieldViolation::new(
                field,
                ViolationCode::NotAString,
                format!("{field} must be a string"),
            ));
            None
        }
    }
}

/// Extract a required string field of at most [`MAX_FIELD_CHARS`] characters.
pub(crate) fn require_bounded_string(
    payload: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let text = require_string(payload, field, violations)?;
    if text.chars().count() > MAX_FIELD_CHARS {
        violations.push(FieldViolation::new(
            field,
            ViolationCode::TooLong,
            format!("{field} must be at most {MAX_FIELD_CHARS} characters"),
        ));
        return None;
    }
    Some(text)
}

/// Extract a required integer field.
///
/// Only integral JSON numbers in `i32` range qualify; strings and floats are
/// rejected rather than coerced.
pub(crate) fn require_integer(
    payload: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<i32> {
    let value = required(payload, field, violations)?;
    let parsed = value.as_i64().and_then(|raw| i32::try_from(raw).ok());
    if parsed.is_none() {
        violations.push(FieldViolation::new(
            field,
            ViolationCode::NotAnInteger,
            format!("{field} must be an integer"),
        ));
    }
    parsed
}

/// Extract a required boolean-like field.
///
/// The historical clients of this API submit colour flags as JSON booleans,
/// as `0`/`1` numbers, and as `"0"`/`"1"` strings, so all three spellings
/// are accepted and normalised to a boolean.
pub(crate) fn require_boolean_like(
    payload: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<bool> {
    let value = required(payload, field, violations)?;
    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    };
    if parsed.is_none() {
        violations.push(FieldViolation::new(
            field,
            ViolationCode::NotABoolean,
            format!("{field} must be a boolean"),
        ));
    }
    parsed
}

/// Extract a required, syntactically valid email address.
pub(crate) fn require_email(
    payload: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let text = require_string(payload, field, violations)?;
    if !text.validate_email() {
        violations.push(FieldViolation::new(
            field,
            ViolationCode::InvalidEmail,
            format!("{field} must be a valid email address"),
        ));
        return None;
    }
    Some(text)
}
