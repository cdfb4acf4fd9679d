//! Query parameter types for the `/search` endpoints.
//!
//! Every parameter is taken as raw text so that a non-numeric id is treated
//! as "no filter" rather than failing extraction. The query string is read
//! as key/value pairs and a repeated key keeps its first value.

use serde::Deserialize;
use taskboard_core::search::{id_filter, text_filter};
use taskboard_db::models::project::ProjectFilter;
use taskboard_db::models::task::TaskFilter;
use taskboard_db::models::user::UserFilter;

type QueryPairs = Vec<(String, String)>;

fn first(pairs: &QueryPairs, key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `?name=&email=`
#[derive(Debug, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct UserSearchParams {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<QueryPairs> for UserSearchParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            name: first(&pairs, "name"),
            email: first(&pairs, "email"),
        }
    }
}

impl From<UserSearchParams> for UserFilter {
    fn from(params: UserSearchParams) -> Self {
        Self {
            name: text_filter(params.name),
            email: text_filter(params.email),
        }
    }
}

/// `?title=&priority=&status=&assignee=&project=`
#[derive(Debug, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct TaskSearchParams {
    pub title: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub project: Option<String>,
}

impl From<QueryPairs> for TaskSearchParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            title: first(&pairs, "title"),
            priority: first(&pairs, "priority"),
            status: first(&pairs, "status"),
            assignee: first(&pairs, "assignee"),
            project: first(&pairs, "project"),
        }
    }
}

impl From<TaskSearchParams> for TaskFilter {
    fn from(params: TaskSearchParams) -> Self {
        Self {
            title: text_filter(params.title),
            priority: text_filter(params.priority),
            status: text_filter(params.status),
            assignee_id: id_filter(params.assignee.as_deref()),
            project_id: id_filter(params.project.as_deref()),
        }
    }
}

/// `?title=&manager=`
#[derive(Debug, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct ProjectSearchParams {
    pub title: Option<String>,
    pub manager: Option<String>,
}

impl From<QueryPairs> for ProjectSearchParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            title: first(&pairs, "title"),
            manager: first(&pairs, "manager"),
        }
    }
}

impl From<ProjectSearchParams> for ProjectFilter {
    fn from(params: ProjectSearchParams) -> Self {
        Self {
            title: text_filter(params.title),
            manager_id: id_filter(params.manager.as_deref()),
        }
    }
}
