//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation (and generation, used by the
//!   token issuer and by tests).

pub mod jwt;
