//! Validator descriptor helpers.
//!
//! Descriptors are emitted verbatim into [`Rule::validate`](crate::Rule::validate)
//! for the frontend to interpret; nothing here evaluates them.

use serde_json::{Value, json};

use crate::Validator;

/// Event on which the frontend re-checks a field.
pub const DEFAULT_TRIGGER: &str = "blur";

fn descriptor(entries: Value) -> Validator {
    match entries {
        Value::Object(map) => map,
        _ => Validator::new(),
    }
}

/// Marks a field as required.
///
/// # Examples
///
/// ```
/// use form_create_core::validator;
///
/// let v = validator::required("Name is required");
/// assert_eq!(v["required"], true);
/// assert_eq!(v["trigger"], "blur");
/// ```
pub fn required(message: impl Into<String>) -> Validator {
    descriptor(json!({
        "required": true,
        "message": message.into(),
        "trigger": DEFAULT_TRIGGER,
    }))
}

/// Marks a field as required and of a given value type (`"number"`,
/// `"array"`, ...).
pub fn required_type(value_type: &str, message: impl Into<String>) -> Validator {
    let mut validator = required(message);
    validator.insert("type".into(), json!(value_type));
    validator
}

/// Requires the value to match a regular expression.
pub fn pattern(regex: &str, message: impl Into<String>) -> Validator {
    descriptor(json!({
        "pattern": regex,
        "message": message.into(),
        "trigger": DEFAULT_TRIGGER,
    }))
}

/// Bounds the value length.
pub fn length(min: usize, max: usize, message: impl Into<String>) -> Validator {
    descriptor(json!({
        "min": min,
        "max": max,
        "message": message.into(),
        "trigger": DEFAULT_TRIGGER,
    }))
}
