//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::schedule;
use taskboard_core::search::{contains_ci, matches_exact};
use taskboard_core::types::{DbId, Timestamp};
use taskboard_core::validation::{FieldCheck, TASK_PRIORITIES};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub assignee_id: DbId,
    pub project_id: DbId,
    pub created_at: Timestamp,
    /// Always set on create; `None` only after an update that omitted it.
    pub completed_at: Option<Timestamp>,
}

/// Request body for creating or replacing a task.
///
/// Missing or `null` fields decode to their zero value and are then caught by
/// [`TaskInput::validate`]. On update every mutable column is overwritten,
/// so omitting `description`, `status`, or `completedAt` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskInput {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub priority: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub status: String,
    pub assignee_id: DbId,
    pub project_id: DbId,
    pub completed_at: Option<Timestamp>,
}

impl TaskInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut check = FieldCheck::new();
        check
            .required_text("title", &self.title)
            .required_text("priority", &self.priority)
            .one_of("priority", &self.priority, TASK_PRIORITIES)
            .required_id("assigneeId", self.assignee_id)
            .required_id("projectId", self.project_id);
        check.finish()
    }
}

/// A task ready to insert, with `completedAt` resolved.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub assignee_id: DbId,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub completed_at: Timestamp,
}

impl NewTask {
    /// Stamp `created_at` and apply the completion-date rule.
    pub fn from_input(input: TaskInput, created_at: Timestamp) -> Result<Self, CoreError> {
        let completed_at = schedule::task_completion(created_at, input.completed_at)?;
        Ok(Self {
            title: input.title,
            description: input.description,
            priority: input.priority,
            status: input.status,
            assignee_id: input.assignee_id,
            project_id: input.project_id,
            created_at,
            completed_at,
        })
    }
}

/// Filters for `/search/tasks`. Text fields match case-insensitive
/// substrings; ids match exactly.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub title: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        contains_ci(&task.title, self.title.as_deref())
            && contains_ci(&task.priority, self.priority.as_deref())
            && contains_ci(&task.status, self.status.as_deref())
            && matches_exact(&task.assignee_id, self.assignee_id.as_ref())
            && matches_exact(&task.project_id, self.project_id.as_ref())
    }
}
