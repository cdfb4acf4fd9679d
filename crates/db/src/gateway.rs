//! The persistence seam handlers depend on.
//!
//! Handlers hold an `Arc<dyn Gateway>` rather than a pool, so the store is
//! constructed once at startup and injected. [`PgGateway`] is the
//! production implementation; [`InMemoryGateway`](crate::memory::InMemoryGateway)
//! backs the HTTP tests.
//!
//! Not-found is never an error here: lookups return `Option`, deletes
//! return whether a row was removed. `sqlx::Error` is reserved for store
//! failures.

use async_trait::async_trait;
use taskboard_core::types::DbId;

use crate::models::project::{NewProject, Project, ProjectFilter, ProjectInput};
use crate::models::task::{NewTask, Task, TaskFilter, TaskInput};
use crate::models::user::{NewUser, User, UserFilter, UserInput};
use crate::repositories::{ProjectRepo, TaskRepo, UserRepo};
use crate::DbPool;

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn create_user(&self, input: &NewUser) -> StoreResult<User>;
    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>>;
    async fn update_user(&self, id: DbId, input: &UserInput) -> StoreResult<Option<User>>;
    async fn delete_user(&self, id: DbId) -> StoreResult<bool>;
    async fn search_users(&self, filter: &UserFilter) -> StoreResult<Vec<User>>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;
    async fn create_task(&self, input: &NewTask) -> StoreResult<Task>;
    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>>;
    async fn update_task(&self, id: DbId, input: &TaskInput) -> StoreResult<Option<Task>>;
    async fn delete_task(&self, id: DbId) -> StoreResult<bool>;
    async fn search_tasks(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>>;
    async fn tasks_by_assignee(&self, user_id: DbId) -> StoreResult<Vec<Task>>;
    async fn tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
    async fn create_project(&self, input: &NewProject) -> StoreResult<Project>;
    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;
    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>>;
    async fn delete_project(&self, id: DbId) -> StoreResult<bool>;
    async fn search_projects(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>>;
}

/// Everything the HTTP layer needs from a store.
pub trait Gateway: UserStore + TaskStore + ProjectStore {}

impl<T> Gateway for T where T: UserStore + TaskStore + ProjectStore {}

/// PostgreSQL-backed gateway. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgGateway {
    pool: DbPool,
}

impl PgGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgGateway {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        UserRepo::list(&self.pool).await
    }

    async fn create_user(&self, input: &NewUser) -> StoreResult<User> {
        UserRepo::create(&self.pool, input).await
    }

    async fn find_user(&self, id: DbId) -> StoreResult<Option<User>> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn update_user(&self, id: DbId, input: &UserInput) -> StoreResult<Option<User>> {
        UserRepo::update(&self.pool, id, input).await
    }

    async fn delete_user(&self, id: DbId) -> StoreResult<bool> {
        UserRepo::delete(&self.pool, id).await
    }

    async fn search_users(&self, filter: &UserFilter) -> StoreResult<Vec<User>> {
        UserRepo::search(&self.pool, filter).await
    }
}

#[async_trait]
impl TaskStore for PgGateway {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        TaskRepo::list(&self.pool).await
    }

    async fn create_task(&self, input: &NewTask) -> StoreResult<Task> {
        TaskRepo::create(&self.pool, input).await
    }

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        TaskRepo::find_by_id(&self.pool, id).await
    }

    async fn update_task(&self, id: DbId, input: &TaskInput) -> StoreResult<Option<Task>> {
        TaskRepo::update(&self.pool, id, input).await
    }

    async fn delete_task(&self, id: DbId) -> StoreResult<bool> {
        TaskRepo::delete(&self.pool, id).await
    }

    async fn search_tasks(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        TaskRepo::search(&self.pool, filter).await
    }

    async fn tasks_by_assignee(&self, user_id: DbId) -> StoreResult<Vec<Task>> {
        TaskRepo::list_by_assignee(&self.pool, user_id).await
    }

    async fn tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>> {
        TaskRepo::list_by_project(&self.pool, project_id).await
    }
}

#[async_trait]
impl ProjectStore for PgGateway {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        ProjectRepo::list(&self.pool).await
    }

    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, input).await
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> StoreResult<Option<Project>> {
        ProjectRepo::update(&self.pool, id, input).await
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        ProjectRepo::delete(&self.pool, id).await
    }

    async fn search_projects(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>> {
        ProjectRepo::search(&self.pool, filter).await
    }
}
