//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::schedule;
use taskboard_core::search::{contains_ci, matches_exact};
use taskboard_core::types::{DbId, Timestamp};
use taskboard_core::validation::FieldCheck;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub manager_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
}

/// Request body for creating or replacing a project.
///
/// `startDate` is server-assigned and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub description: String,
    pub manager_id: DbId,
    pub end_date: Option<Timestamp>,
}

impl ProjectInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut check = FieldCheck::new();
        check
            .required_text("title", &self.title)
            .required_id("managerId", self.manager_id);
        check.finish()
    }
}

/// A project ready to insert, with `endDate` resolved.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub manager_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

impl NewProject {
    /// Stamp `start_date` and apply the end-date rule.
    pub fn from_input(input: ProjectInput, start_date: Timestamp) -> Result<Self, CoreError> {
        let end_date = schedule::project_end(start_date, input.end_date)?;
        Ok(Self {
            title: input.title,
            description: input.description,
            manager_id: input.manager_id,
            start_date,
            end_date,
        })
    }
}

/// Filters for `/search/projects`.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub title: Option<String>,
    pub manager_id: Option<DbId>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        contains_ci(&project.title, self.title.as_deref())
            && matches_exact(&project.manager_id, self.manager_id.as_ref())
    }
}
