//! Repository for the `categories` table.

use sqlx::PgPool;
use taskmind_core::import::CategorySeed;
use taskmind_core::types::DbId;

use crate::models::category::Category;

const COLUMNS: &str =
    "id, owner_id, name, color, icon, kind, ai_generated, created_at, updated_at";

/// Provides owner-scoped reads and inserts for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// Names are unique per owner across all kinds (`uq_categories_owner_lower_name`).
    pub async fn create(pool: &PgPool, seed: &CategorySeed) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (owner_id, name, color, icon, kind, ai_generated)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(seed.owner_id)
            .bind(&seed.name)
            .bind(&seed.color)
            .bind(&seed.icon)
            .bind(seed.kind.as_str())
            .bind(seed.ai_generated)
            .fetch_one(pool)
            .await
    }

    /// List every category of an owner regardless of kind.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List the categories that can be attached to tasks (`task` or `both`).
    pub async fn list_for_tasks(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE owner_id = $1 AND kind IN ('task', 'both') \
             ORDER BY id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category of any kind by case-insensitive name.
    pub async fn find_by_name(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories WHERE owner_id = $1 AND lower(name) = lower($2)"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }
}
