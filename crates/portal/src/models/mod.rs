//! Domain models for the portal.

pub mod session;
pub mod user;

pub use session::keys as session_keys;
pub use user::{DirectoryUser, UserDirectory};
