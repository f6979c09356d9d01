//! In-memory [`ImportStore`] for pipeline tests.
//!
//! Enforces the same per-owner, case-insensitive name uniqueness as the
//! database indexes, and can inject the failures the pipeline must survive.

use std::sync::Mutex;

use async_trait::async_trait;

use super::resolver::fold_name;
use super::store::{
    CategoryKind, CategorySeed, ImportStore, NamedRecord, ProjectSeed, StoreError, TaskSeed,
};
use crate::task_vocab::{TaskPriority, TaskStatus};
use crate::types::DbId;

#[derive(Debug, Clone)]
pub struct MemProject {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct MemCategory {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub icon: String,
    pub kind: CategoryKind,
    pub ai_generated: bool,
}

#[derive(Debug, Clone)]
pub struct MemTask {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub project_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub estimated_minutes: Option<u32>,
    pub ai_generated: bool,
    pub ai_metadata: serde_json::Value,
    pub source_note_id: Option<DbId>,
}

impl NamedRecord for MemProject {
    fn id(&self) -> DbId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for MemCategory {
    fn id(&self) -> DbId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// One-shot injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// `projects_for_owner` fails.
    ListProjects,
    /// `create_project` reports a duplicate that never becomes visible.
    PhantomDuplicateProject,
}

#[derive(Default)]
struct State {
    next_id: DbId,
    calls: usize,
    projects: Vec<MemProject>,
    categories: Vec<MemCategory>,
    tasks: Vec<MemTask>,
    fail_next: Option<Failure>,
    failing_title: Option<String>,
    racing_project: Option<(DbId, String)>,
}

impl State {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn take_failure(&mut self, which: Failure) -> bool {
        if self.fail_next == Some(which) {
            self.fail_next = None;
            return true;
        }
        false
    }

    fn insert_project(&mut self, owner_id: DbId, name: &str) -> Result<MemProject, StoreError> {
        let key = fold_name(name);
        if self
            .projects
            .iter()
            .any(|p| p.owner_id == owner_id && fold_name(&p.name) == key)
        {
            return Err(StoreError::DuplicateKey(format!("uq_projects_owner_lower_name: {name}")));
        }
        let project = MemProject {
            id: self.next_id(),
            owner_id,
            name: name.to_string(),
        };
        self.projects.push(project.clone());
        Ok(project)
    }

    fn insert_category(
        &mut self,
        owner_id: DbId,
        name: &str,
        icon: &str,
        kind: CategoryKind,
        ai_generated: bool,
    ) -> Result<MemCategory, StoreError> {
        let key = fold_name(name);
        if self
            .categories
            .iter()
            .any(|c| c.owner_id == owner_id && fold_name(&c.name) == key)
        {
            return Err(StoreError::DuplicateKey(format!("uq_categories_owner_lower_name: {name}")));
        }
        let category = MemCategory {
            id: self.next_id(),
            owner_id,
            name: name.to_string(),
            icon: icon.to_string(),
            kind,
            ai_generated,
        };
        self.categories.push(category.clone());
        Ok(category)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn seed_project(&self, owner_id: DbId, name: &str) -> DbId {
        self.lock().insert_project(owner_id, name).unwrap().id
    }

    pub fn seed_category(&self, owner_id: DbId, name: &str, kind: CategoryKind) -> DbId {
        self.lock()
            .insert_category(owner_id, name, "tag", kind, false)
            .unwrap()
            .id
    }

    pub fn fail_next(&self, failure: Failure) {
        self.lock().fail_next = Some(failure);
    }

    pub fn fail_task_titled(&self, title: &str) {
        self.lock().failing_title = Some(title.to_string());
    }

    /// On the next `create_project` for this folded name, insert `name` as if
    /// another request got there first, then report the duplicate.
    pub fn race_project_on_create(&self, owner_id: DbId, name: &str) {
        self.lock().racing_project = Some((owner_id, name.to_string()));
    }

    pub fn projects(&self) -> Vec<MemProject> {
        self.lock().projects.clone()
    }

    pub fn categories(&self) -> Vec<MemCategory> {
        self.lock().categories.clone()
    }

    pub fn tasks(&self) -> Vec<MemTask> {
        self.lock().tasks.clone()
    }

    pub fn calls(&self) -> usize {
        self.lock().calls
    }
}

#[async_trait]
impl ImportStore for MemoryStore {
    type Project = MemProject;
    type Category = MemCategory;
    type Task = MemTask;

    async fn projects_for_owner(&self, owner_id: DbId) -> Result<Vec<MemProject>, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        if state.take_failure(Failure::ListProjects) {
            return Err(StoreError::Backend("connection reset".into()));
        }
        Ok(state
            .projects
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn task_categories_for_owner(
        &self,
        owner_id: DbId,
    ) -> Result<Vec<MemCategory>, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        Ok(state
            .categories
            .iter()
            .filter(|c| c.owner_id == owner_id && c.kind != CategoryKind::Note)
            .cloned()
            .collect())
    }

    async fn find_project_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<MemProject>, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        let key = fold_name(name);
        Ok(state
            .projects
            .iter()
            .find(|p| p.owner_id == owner_id && fold_name(&p.name) == key)
            .cloned())
    }

    async fn find_category_by_name(
        &self,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<MemCategory>, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        let key = fold_name(name);
        Ok(state
            .categories
            .iter()
            .find(|c| c.owner_id == owner_id && fold_name(&c.name) == key)
            .cloned())
    }

    async fn create_project(&self, seed: &ProjectSeed) -> Result<MemProject, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        if state.take_failure(Failure::PhantomDuplicateProject) {
            return Err(StoreError::DuplicateKey("uq_projects_owner_lower_name".into()));
        }
        let races = matches!(
            &state.racing_project,
            Some((owner_id, name))
                if *owner_id == seed.owner_id && fold_name(name) == fold_name(&seed.name)
        );
        if races {
            if let Some((owner_id, name)) = state.racing_project.take() {
                state.insert_project(owner_id, &name)?;
            }
        }
        state.insert_project(seed.owner_id, &seed.name)
    }

    async fn create_category(&self, seed: &CategorySeed) -> Result<MemCategory, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        state.insert_category(
            seed.owner_id,
            &seed.name,
            &seed.icon,
            seed.kind,
            seed.ai_generated,
        )
    }

    async fn create_task(&self, seed: &TaskSeed) -> Result<MemTask, StoreError> {
        let mut state = self.lock();
        state.calls += 1;
        if state.failing_title.as_deref() == Some(seed.title.as_str()) {
            return Err(StoreError::Backend(format!("insert of '{}' failed", seed.title)));
        }
        let task = MemTask {
            id: state.next_id(),
            owner_id: seed.owner_id,
            title: seed.title.clone(),
            priority: seed.priority,
            status: seed.status,
            project_id: seed.project_id,
            category_id: seed.category_id,
            estimated_minutes: seed.estimated_minutes,
            ai_generated: seed.ai_generated,
            ai_metadata: seed.ai_metadata.clone(),
            source_note_id: seed.source_note_id,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }
}
