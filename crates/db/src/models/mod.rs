//! Row structs for the owner-scoped tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row. Inserts go through the seed types of
//! `taskmind_core::import`, so there are no separate create DTOs here.

pub mod category;
pub mod note;
pub mod project;
pub mod task;
