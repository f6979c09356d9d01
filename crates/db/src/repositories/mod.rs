//! Repository layer: one zero-sized struct per table with async methods that
//! take a `&PgPool`. Every query is scoped by `owner_id`.

pub mod category_repo;
pub mod note_repo;
pub mod project_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
