//! Postgres-backed [`ImportStore`] for the AI task import pipeline.

use async_trait::async_trait;
use sqlx::PgPool;
use taskmind_core::import::{CategorySeed, ImportStore, ProjectSeed, StoreError, TaskSeed};
use taskmind_core::types::DbId;

use crate::is_unique_violation;
use crate::models::category::Category;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::repositories::{CategoryRepo, ProjectRepo, TaskRepo};

/// Adapter from the repository layer to the import pipeline's storage trait.
pub struct PgImportStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgImportStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error into the pipeline's storage error, keeping unique
/// violations distinguishable.
fn store_error(err: sqlx::Error) -> StoreError {
    if is_unique_violation(&err) {
        let constraint = match &err {
            sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("unknown").to_string(),
            _ => "unknown".to_string(),
        };
        return StoreError::DuplicateKey(constraint);
    }
    tracing::error!(error = %err, "Import store query failed");
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl ImportStore for PgImportStore<'_> {
    type Project = Project;
    type Category = Category;
    type Task = Task;

    async fn projects_for_owner(&self, owner_id: DbId) -> Result<Vec<Project>, StoreError> {
        ProjectRepo::list_by_owner(self.pool, owner_id)
            .await
            .map_err(store_error)
    }

    async fn task_categories_for_owner(&self, owner_id: DbId) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::list_for_tasks(self.pool, owner_id)
            .await
            .map_err(store_error)
    }

    async fn find_project_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Project>, StoreError> {
        ProjectRepo::find_by_name(self.pool, owner_id, name)
            .await
            .map_err(store_error)
    }

    async fn find_category_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Category>, StoreError> {
        CategoryRepo::find_by_name(self.pool, owner_id, name)
            .await
            .map_err(store_error)
    }

    async fn create_project(&self, seed: &ProjectSeed) -> Result<Project, StoreError> {
        ProjectRepo::create(self.pool, seed)
            .await
            .map_err(store_error)
    }

    async fn create_category(&self, seed: &CategorySeed) -> Result<Category, StoreError> {
        CategoryRepo::create(self.pool, seed)
            .await
            .map_err(store_error)
    }

    async fn create_task(&self, seed: &TaskSeed) -> Result<Task, StoreError> {
        TaskRepo::create(self.pool, seed).await.map_err(store_error)
    }
}
