//! Request payload validation for the `/todos` resource.
//!
//! Handlers decode bodies as raw JSON and run them through these checks
//! before anything touches the store: key membership against the allowed
//! set, required fields, value types, and timestamp parsing. The patch DTO
//! tracks key presence per field so a present-but-null key overwrites a
//! nullable column while an absent key leaves it untouched.

use serde_json::{Map, Value};
use tasklist_core::error::CoreError;
use tasklist_core::time::parse_iso8601;
use tasklist_core::types::Timestamp;
use tasklist_db::models::todo::{NewTodo, TodoPatch};

/// Keys a client may supply on create and update payloads.
///
/// `created_at` and `updated_at` are accepted for compatibility but their
/// values are ignored; the store maintains both columns itself.
const ALLOWED_FIELDS: &[&str] = &[
    "title",
    "description",
    "completed",
    "created_at",
    "updated_at",
    "deadline_at",
];

/// Validate and decode a create payload.
///
/// Rejects unknown keys, a missing or null `title`, and malformed values.
pub fn parse_create(body: &Value) -> Result<NewTodo, CoreError> {
    let fields = as_object(body)?;
    check_allowed_keys(fields)?;

    let title = match fields.get("title") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => {
            return Err(CoreError::Validation(
                "Title must not be missing".to_string(),
            ))
        }
        Some(_) => {
            return Err(CoreError::Validation(
                "Field 'title' must be a string".to_string(),
            ))
        }
    };

    Ok(NewTodo {
        title,
        description: optional_string(fields, "description")?,
        completed: optional_bool(fields, "completed")?,
        deadline_at: optional_timestamp(fields, "deadline_at")?,
    })
}

/// Validate and decode an update payload into a presence-tracking patch.
///
/// Rejects an `id` key, unknown keys, a null `title`, and malformed values.
pub fn parse_update(body: &Value) -> Result<TodoPatch, CoreError> {
    let fields = as_object(body)?;

    if fields.contains_key("id") {
        return Err(CoreError::Validation(
            "Field 'id' cannot be changed".to_string(),
        ));
    }
    check_allowed_keys(fields)?;

    let mut patch = TodoPatch::default();

    if let Some(value) = fields.get("title") {
        // The title column is NOT NULL, so a present-but-null title is
        // rejected rather than passed through to the store.
        match value {
            Value::String(s) => patch.title = Some(s.clone()),
            _ => {
                return Err(CoreError::Validation(
                    "Field 'title' must be a non-null string".to_string(),
                ))
            }
        }
    }

    if let Some(value) = fields.get("completed") {
        match value {
            Value::Bool(b) => patch.completed = Some(*b),
            _ => {
                return Err(CoreError::Validation(
                    "Field 'completed' must be a boolean".to_string(),
                ))
            }
        }
    }

    if let Some(value) = fields.get("description") {
        patch.description = Some(match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            _ => {
                return Err(CoreError::Validation(
                    "Field 'description' must be a string".to_string(),
                ))
            }
        });
    }

    if let Some(value) = fields.get("deadline_at") {
        patch.deadline_at = Some(match value {
            Value::Null => None,
            Value::String(s) => Some(parse_iso8601(s)?),
            _ => {
                return Err(CoreError::Validation(
                    "Field 'deadline_at' must be an ISO-8601 string".to_string(),
                ))
            }
        });
    }

    Ok(patch)
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object().ok_or_else(|| {
        CoreError::Validation("Request body must be a JSON object".to_string())
    })
}

fn check_allowed_keys(fields: &Map<String, Value>) -> Result<(), CoreError> {
    for key in fields.keys() {
        if !ALLOWED_FIELDS.contains(&key.as_str()) {
            return Err(CoreError::Validation(format!("Unknown field '{key}'")));
        }
    }
    Ok(())
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, CoreError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CoreError::Validation(format!(
            "Field '{key}' must be a string"
        ))),
    }
}

fn optional_bool(fields: &Map<String, Value>, key: &str) -> Result<Option<bool>, CoreError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(CoreError::Validation(format!(
            "Field '{key}' must be a boolean"
        ))),
    }
}

fn optional_timestamp(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<Timestamp>, CoreError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_iso8601(s).map(Some),
        Some(_) => Err(CoreError::Validation(format!(
            "Field '{key}' must be an ISO-8601 string"
        ))),
    }
}
