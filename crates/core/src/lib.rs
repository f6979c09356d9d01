//! Domain types and pure logic for the Taskmind backend.
//!
//! Nothing in this crate touches the database or the network directly. The
//! AI task import pipeline talks to storage through the
//! [`import::ImportStore`] trait, implemented for Postgres in `taskmind-db`.

pub mod error;
pub mod import;
pub mod task_vocab;
pub mod topic_style;
pub mod types;
