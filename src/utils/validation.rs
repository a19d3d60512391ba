use std::collections::BTreeMap;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::error::{Error, Result};

/// Field name to the list of human-readable violations for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Trims a submitted string and drops it when nothing is left, so an empty
/// form field behaves exactly like an omitted one.
pub fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Flattens validator output into the `errors` map of the response envelope.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, list)| {
            let field = wire_name(&field.to_string()).to_string();
            let messages = list
                .iter()
                .map(|error| describe(&field, error))
                .collect();
            (field, messages)
        })
        .collect()
}

/// Reads request fields that arrive as raw JSON values. A value whose JSON
/// type cannot stand in for the expected one becomes a field error under the
/// given wire name instead of failing the whole body.
#[derive(Debug, Default)]
pub struct TypedFields {
    errors: FieldErrors,
}

impl TypedFields {
    /// Strings pass through and `null` is absent.
    pub fn text(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(_) => {
                self.reject(field, format!("The {} must be a string.", label(field)));
                None
            }
        }
    }

    /// Whole numbers, or strings holding one. A blank string is absent.
    pub fn integer(&mut self, field: &str, value: Option<Value>) -> Option<i64> {
        let parsed = match value {
            None | Some(Value::Null) => return None,
            Some(Value::Number(number)) => number.as_i64(),
            Some(Value::String(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse().ok()
            }
            Some(_) => None,
        };

        if parsed.is_none() {
            self.reject(field, format!("The {} must be an integer.", label(field)));
        }
        parsed
    }

    /// Merges the type errors with the rule violations. A field with the
    /// wrong type reports only that, not the rules it could not be checked
    /// against.
    pub fn finish(self, checked: std::result::Result<(), ValidationErrors>) -> Result<()> {
        let mut errors = match checked {
            Ok(()) => FieldErrors::new(),
            Err(violations) => field_errors(&violations),
        };
        errors.extend(self.errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    fn reject(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), vec![message]);
    }
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

fn wire_name(field: &str) -> &str {
    match field {
        "job_type" => "type",
        other => other,
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let label = label(field);
    match error.code.as_ref() {
        "required" => format!("The {} field is required.", label),
        "length" => match error.params.get("max") {
            Some(max) => format!("The {} may not be greater than {} characters.", label, max),
            None => format!("The {} has an invalid length.", label),
        },
        "email" => format!("The {} must be a valid email address.", label),
        "url" => format!("The {} must be a valid URL.", label),
        _ => format!("The {} is invalid.", label),
    }
}
