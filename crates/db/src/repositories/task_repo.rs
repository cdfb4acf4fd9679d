//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::task::{NewTask, Task, TaskFilter, TaskInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, priority, status, \
                       assignee_id, project_id, created_at, completed_at";

/// Provides CRUD and lookup operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (title, description, priority, status, assignee_id, project_id,
                 created_at, completed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.assignee_id)
            .bind(input.project_id)
            .bind(input.created_at)
            .bind(input.completed_at)
            .fetch_one(pool)
            .await
    }

    /// Find a task by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List tasks assigned to a user.
    pub async fn list_by_assignee(
        pool: &PgPool,
        assignee_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE assignee_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(assignee_id)
            .fetch_all(pool)
            .await
    }

    /// List tasks belonging to a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column. `created_at` is never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TaskInput,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                priority = $4,
                status = $5,
                assignee_id = $6,
                project_id = $7,
                completed_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.assignee_id)
            .bind(input.project_id)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search tasks. Every filter is optional and present ones are AND-ed:
    /// text columns by case-insensitive substring, ids exactly.
    pub async fn search(pool: &PgPool, filter: &TaskFilter) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::TEXT IS NULL OR STRPOS(LOWER(title), LOWER($1)) > 0)
               AND ($2::TEXT IS NULL OR STRPOS(LOWER(priority), LOWER($2)) > 0)
               AND ($3::TEXT IS NULL OR STRPOS(LOWER(status), LOWER($3)) > 0)
               AND ($4::BIGINT IS NULL OR assignee_id = $4)
               AND ($5::BIGINT IS NULL OR project_id = $5)
             ORDER BY id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(filter.title.as_deref())
            .bind(filter.priority.as_deref())
            .bind(filter.status.as_deref())
            .bind(filter.assignee_id)
            .bind(filter.project_id)
            .fetch_all(pool)
            .await
    }
}
