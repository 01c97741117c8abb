//! Core types for RecruitDesk.
//!
//! Type-safe wrappers for the identity data the resolvers consume.

pub mod email;
pub mod role;
pub mod session;

pub use email::{Email, EmailError};
pub use role::{Role, RoleParseError};
pub use session::Session;
