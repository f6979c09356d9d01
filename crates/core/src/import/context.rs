//! Batch-scoped state for one import call.
//!
//! [`BatchContext`] owns the lookup cache and the per-batch creation lists. It
//! is created at the start of [`super::import_tasks`], threaded through the
//! materializer by `&mut`, and dropped when the call returns.

use super::resolver::resolve_by_name;
use super::store::{ImportStore, NamedRecord, StoreError};
use super::NewEntityRef;
use crate::types::DbId;

/// Snapshot of the owner's projects and task categories, appended to as the
/// batch creates new ones.
#[derive(Debug, Clone)]
pub struct LookupCache<P, C> {
    pub projects: Vec<P>,
    pub categories: Vec<C>,
}

impl<P, C> LookupCache<P, C> {
    /// Load both sequences for `owner_id`. Called once per import.
    pub async fn load<S>(store: &S, owner_id: DbId) -> Result<Self, StoreError>
    where
        S: ImportStore<Project = P, Category = C>,
    {
        let projects = store.projects_for_owner(owner_id).await?;
        let categories = store.task_categories_for_owner(owner_id).await?;
        Ok(Self {
            projects,
            categories,
        })
    }
}

/// Everything the materializer needs to resolve names within one batch.
pub struct BatchContext<P, C> {
    pub owner_id: DbId,
    pub auto_create: bool,
    pub(crate) cache: LookupCache<P, C>,
    /// Projects inserted by this batch, in creation order.
    pub(crate) created_projects: Vec<P>,
    /// Categories inserted by this batch, in creation order.
    pub(crate) created_categories: Vec<C>,
}

impl<P, C> BatchContext<P, C>
where
    P: NamedRecord + Clone,
    C: NamedRecord + Clone,
{
    pub fn new(owner_id: DbId, auto_create: bool, cache: LookupCache<P, C>) -> Self {
        Self {
            owner_id,
            auto_create,
            cache,
            created_projects: Vec::new(),
            created_categories: Vec::new(),
        }
    }

    /// Existing or batch-created project with this name. Created rows are
    /// appended to the cache, so one lookup covers both.
    pub fn find_project(&self, name: &str) -> Option<P> {
        resolve_by_name(Some(name), &self.cache.projects).cloned()
    }

    /// Existing or batch-created category with this name.
    pub fn find_category(&self, name: &str) -> Option<C> {
        resolve_by_name(Some(name), &self.cache.categories).cloned()
    }

    pub(crate) fn record_created_project(&mut self, project: P) {
        self.cache.projects.push(project.clone());
        self.created_projects.push(project);
    }

    pub(crate) fn record_created_category(&mut self, category: C) {
        self.cache.categories.push(category.clone());
        self.created_categories.push(category);
    }

    /// Remember a row that another writer created concurrently.
    pub(crate) fn remember_project(&mut self, project: P) {
        self.cache.projects.push(project);
    }

    pub(crate) fn remember_category(&mut self, category: C) {
        self.cache.categories.push(category);
    }

    pub fn new_projects(&self) -> Vec<NewEntityRef> {
        self.created_projects.iter().map(NewEntityRef::of).collect()
    }

    pub fn new_categories(&self) -> Vec<NewEntityRef> {
        self.created_categories
            .iter()
            .map(NewEntityRef::of)
            .collect()
    }
}
