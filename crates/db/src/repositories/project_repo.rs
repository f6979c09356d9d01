//! Repository for the `projects` table.

use sqlx::PgPool;
use taskmind_core::import::ProjectSeed;
use taskmind_core::types::DbId;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, description, color, icon, status, \
    start_date, end_date, ai_generated, created_at, updated_at";

/// Provides owner-scoped reads and inserts for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Fails with a unique violation on `uq_projects_owner_lower_name` when
    /// the owner already has a project with the same case-folded name.
    pub async fn create(pool: &PgPool, seed: &ProjectSeed) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, name, description, color, icon, ai_generated)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(seed.owner_id)
            .bind(&seed.name)
            .bind(&seed.description)
            .bind(&seed.color)
            .bind(&seed.icon)
            .bind(seed.ai_generated)
            .fetch_one(pool)
            .await
    }

    /// List all projects of an owner, oldest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find a project by case-insensitive name.
    pub async fn find_by_name(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE owner_id = $1 AND lower(name) = lower($2)"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }
}
