//! Todo entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tasklist_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub deadline_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
    pub deadline_at: Option<Timestamp>,
}

/// DTO for partially updating a todo.
///
/// The outer `Option` tracks key presence. For the nullable columns the
/// inner `Option` carries the new value, so `Some(None)` clears the column
/// while `None` leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub description: Option<Option<String>>,
    pub deadline_at: Option<Option<Timestamp>>,
}

/// Optional predicates for listing todos. Predicates combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    /// Exact match on the completion flag.
    pub completed: Option<bool>,
    /// Only rows whose deadline is at or before this instant match; rows
    /// without a deadline never do.
    pub due_by: Option<Timestamp>,
}
