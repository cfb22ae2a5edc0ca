//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use serde_json::Value;
use tasklist_core::error::CoreError;
use tasklist_core::types::{DbId, Timestamp};
use tasklist_db::models::todo::{Todo, TodoFilter};
use tasklist_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::payload;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListTodosParams {
    /// Case-insensitively compared with `"true"`; any other value means
    /// `false`.
    pub completed: Option<String>,
    /// Number of days ahead; only todos due within the window match.
    pub window: Option<i64>,
}

impl ListTodosParams {
    /// Translate query parameters into store filter predicates.
    fn try_into_filter(self, now: Timestamp) -> Result<TodoFilter, CoreError> {
        let due_by = match self.window {
            Some(days) => Some(
                Duration::try_days(days)
                    .and_then(|delta| now.checked_add_signed(delta))
                    .ok_or_else(|| {
                        CoreError::Validation(format!("Invalid window: {days}"))
                    })?,
            ),
            None => None,
        };

        Ok(TodoFilter {
            completed: self.completed.map(|v| v.eq_ignore_ascii_case("true")),
            due_by,
        })
    }
}

/// GET /api/v1/todos
///
/// Lists todos, optionally filtered by completion state and a deadline
/// window in days. Both filters combine with AND.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let filter = params.try_into_filter(chrono::Utc::now())?;
    let todos = TodoRepo::list(&state.pool, &filter).await?;
    Ok(Json(todos))
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// POST /api/v1/todos
///
/// Validates the field set before any store mutation; returns 201 with the
/// persisted record.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let input = payload::parse_create(&body)?;
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/v1/todos/{id}
///
/// Merge semantics: fields present in the payload overwrite the stored
/// values, absent fields are left untouched. An unknown id is reported
/// before payload validation runs.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Todo>> {
    TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    let patch = payload::parse_update(&body)?;

    // The row can disappear between the existence check and the update;
    // the second None folds into the same 404.
    let todo = TodoRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/v1/todos/{id}
///
/// Returns the deleted record's snapshot with 200, or 404 if the id is
/// unknown.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(todo))
}
