//! In-memory [`Gateway`](crate::gateway::Gateway) implementation.
//!
//! Behaves like the PostgreSQL repositories: per-table `BIGSERIAL`-style id
//! sequences starting at 1, results ordered by id, full-replace updates,
//! and the same filter semantics. Used to drive the HTTP layer in tests
//! without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use taskboard_core::types::DbId;
use tokio::sync::RwLock;

use crate::gateway::{ProjectStore, StoreResult, TaskStore, UserStore};
use crate::models::project::{NewProject, Project, ProjectFilter, ProjectInput};
use crate::models::task::{NewTask, Task, TaskFilter, TaskInput};
use crate::models::user::{NewUser, User, UserFilter, UserInput};

/// One table: rows keyed by id plus its sequence.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all_where(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| pred(r)).cloned().collect()
    }

    fn modify(&mut self, id: DbId, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    fn remove(&mut self, id: DbId) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    users: RwLock<Table<User>>,
    tasks: RwLock<Table<Task>>,
    projects: RwLock<Table<Project>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryGateway {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.all_where(|_| true))
    }

    async fn create_user(&self, input: &NewUser) -> StoreResult<User> {
        Ok(self.users.write().await.insert_with(|id| User {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            role: input.role.clone(),
            registration_at: input.registration_at,
        }))
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn update_user(&self, id: DbId, input: &UserInput) -> StoreResult<Option<User>> {
        Ok(self.users.write().await.modify(id, |user| {
            user.name = input.name.clone();
            user.email = input.email.clone();
            user.role = input.role.clone();
        }))
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.users.write().await.remove(id))
    }

    async fn search_users(&self, filter: &UserFilter) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.all_where(|u| filter.matches(u)))
    }
}

#[async_trait]
impl TaskStore for InMemoryGateway {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.all_where(|_| true))
    }

    async fn create_task(&self, input: &NewTask) -> StoreResult<Task> {
        Ok(self.tasks.write().await.insert_with(|id| Task {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            priority: input.priority.clone(),
            status: input.status.clone(),
            assignee_id: input.assignee_id,
            project_id: input.project_id,
            created_at: input.created_at,
            completed_at: Some(input.completed_at),
        }))
    }

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        Ok(self.tasks.read().await.get(id))
    }

    async fn update_task(&self, id: DbId, input: &TaskInput) -> StoreResult<Option<Task>> {
        Ok(self.tasks.write().await.modify(id, |task| {
            task.title = input.title.clone();
            task.description = input.description.clone();
            task.priority = input.priority.clone();
            task.status = input.status.clone();
            task.assignee_id = input.assignee_id;
            task.project_id = input.project_id;
            task.completed_at = input.completed_at;
        }))
    }

    async fn delete_task(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tasks.write().await.remove(id))
    }

    async fn search_tasks(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.all_where(|t| filter.matches(t)))
    }

    async fn tasks_by_assignee(&self, user_id: DbId) -> StoreResult<Vec<Task>> {
        Ok(self
            .tasks
            .read()
            .await
            .all_where(|t| t.assignee_id == user_id))
    }

    async fn tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>> {
        Ok(self
            .tasks
            .read()
            .await
            .all_where(|t| t.project_id == project_id))
    }
}

#[async_trait]
impl ProjectStore for InMemoryGateway {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.projects.read().await.all_where(|_| true))
    }

    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        Ok(self.projects.write().await.insert_with(|id| Project {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            manager_id: input.manager_id,
            start_date: input.start_date,
            end_date: Some(input.end_date),
        }))
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(self.projects.read().await.get(id))
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>> {
        Ok(self.projects.write().await.modify(id, |project| {
            project.title = input.title.clone();
            project.description = input.description.clone();
            project.manager_id = input.manager_id;
            project.end_date = input.end_date;
        }))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.projects.write().await.remove(id))
    }

    async fn search_projects(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>> {
        Ok(self.projects.read().await.all_where(|p| filter.matches(p)))
    }
}
