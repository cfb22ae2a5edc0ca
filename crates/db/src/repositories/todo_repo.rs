//! Repository for the `todos` table.

use sqlx::PgPool;
use tasklist_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoFilter, TodoPatch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, deadline_at, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// If `completed` is `None`, defaults to `false`. `created_at` and
    /// `updated_at` are set by column defaults.
    pub async fn create(pool: &PgPool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed, deadline_at)
             VALUES ($1, $2, COALESCE($3, FALSE), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed)
            .bind(input.deadline_at)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos matching the given filter.
    ///
    /// Rows with a NULL `deadline_at` never match a `due_by` predicate
    /// (the comparison is NULL under three-valued logic).
    pub async fn list(pool: &PgPool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE ($1::BOOL IS NULL OR completed = $1)
               AND ($2::TIMESTAMPTZ IS NULL OR deadline_at <= $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(filter.completed)
            .bind(filter.due_by)
            .fetch_all(pool)
            .await
    }

    /// Update a todo. Only fields present in `input` are applied; a
    /// present-but-null value clears the nullable columns. Refreshes
    /// `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TodoPatch,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE($2, title),
                completed = COALESCE($3, completed),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                deadline_at = CASE WHEN $6 THEN $7 ELSE deadline_at END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.completed)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|d| d.as_deref()))
            .bind(input.deadline_at.is_some())
            .bind(input.deadline_at.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID, returning the deleted row's snapshot.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("DELETE FROM todos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
