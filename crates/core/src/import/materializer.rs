//! Resolve-or-create for AI-suggested project and topic names.
//!
//! Lookup order for a name: the owner's existing records, then the records
//! this batch already created, then (if auto-create is on) a new insert. A
//! duplicate-key failure on insert means a concurrent request won the race;
//! the row is re-read once by name and reused.

use super::context::BatchContext;
use super::resolver::clean_name;
use super::store::{CategoryKind, CategorySeed, ImportStore, ProjectSeed, StoreError};
use crate::error::CoreError;
use crate::topic_style::{random_color, suggest_icon, DEFAULT_PROJECT_ICON};

type Ctx<S> = BatchContext<<S as ImportStore>::Project, <S as ImportStore>::Category>;

/// Resolve `name` to a project, creating it when allowed.
///
/// Returns `Ok(None)` when the name is blank, or when it does not match and
/// auto-create is disabled.
pub async fn materialize_project<S: ImportStore>(
    store: &S,
    ctx: &mut Ctx<S>,
    name: Option<&str>,
) -> Result<Option<S::Project>, CoreError> {
    let Some(name) = clean_name(name) else {
        return Ok(None);
    };
    if let Some(found) = ctx.find_project(name) {
        return Ok(Some(found));
    }
    if !ctx.auto_create {
        return Ok(None);
    }

    let seed = ProjectSeed {
        owner_id: ctx.owner_id,
        name: name.to_string(),
        description: String::new(),
        color: random_color().to_string(),
        icon: DEFAULT_PROJECT_ICON.to_string(),
        ai_generated: true,
    };

    match store.create_project(&seed).await {
        Ok(project) => {
            tracing::debug!(owner_id = ctx.owner_id, name, "Created project from AI suggestion");
            ctx.record_created_project(project.clone());
            Ok(Some(project))
        }
        Err(StoreError::DuplicateKey(detail)) => {
            tracing::warn!(
                owner_id = ctx.owner_id,
                name,
                %detail,
                "Project name taken concurrently, re-resolving",
            );
            let existing = store
                .find_project_by_name(ctx.owner_id, name)
                .await?
                .ok_or_else(|| {
                    CoreError::Internal(format!(
                        "Project '{name}' conflicts with an existing name but could not be found"
                    ))
                })?;
            ctx.remember_project(existing.clone());
            Ok(Some(existing))
        }
        Err(err) => Err(err.into()),
    }
}

/// Resolve `name` to a task category, creating it when allowed.
pub async fn materialize_category<S: ImportStore>(
    store: &S,
    ctx: &mut Ctx<S>,
    name: Option<&str>,
) -> Result<Option<S::Category>, CoreError> {
    let Some(name) = clean_name(name) else {
        return Ok(None);
    };
    if let Some(found) = ctx.find_category(name) {
        return Ok(Some(found));
    }
    if !ctx.auto_create {
        return Ok(None);
    }

    let seed = CategorySeed {
        owner_id: ctx.owner_id,
        name: name.to_string(),
        color: random_color().to_string(),
        icon: suggest_icon(name).to_string(),
        kind: CategoryKind::Task,
        ai_generated: true,
    };

    match store.create_category(&seed).await {
        Ok(category) => {
            tracing::debug!(
                owner_id = ctx.owner_id,
                name,
                icon = %seed.icon,
                "Created category from AI suggestion",
            );
            ctx.record_created_category(category.clone());
            Ok(Some(category))
        }
        Err(StoreError::DuplicateKey(detail)) => {
            tracing::warn!(
                owner_id = ctx.owner_id,
                name,
                %detail,
                "Category name taken concurrently, re-resolving",
            );
            // A note-only category with the same name also trips the
            // constraint; reusing it keeps names unique per owner.
            let existing = store
                .find_category_by_name(ctx.owner_id, name)
                .await?
                .ok_or_else(|| {
                    CoreError::Internal(format!(
                        "Category '{name}' conflicts with an existing name but could not be found"
                    ))
                })?;
            ctx.remember_category(existing.clone());
            Ok(Some(existing))
        }
        Err(err) => Err(err.into()),
    }
}
