//! Business logic services for the portal.
//!
//! # Services
//!
//! - `auth` - Injected authenticator (Argon2id user directory)
//! - `layout` - Loading and validating the navigation/guard layout
//! - `session` - Session Provider over the cookie session store

pub mod auth;
pub mod layout;
pub mod session;

pub use auth::{AuthError, Authenticator, DirectoryAuthenticator, hash_password};
pub use layout::{LayoutLoadError, load_layout, parse_layout};
pub use session::{SessionProvider, current_or_none};
