//! Session middleware configuration for the portal.
//!
//! Cookie sessions backed by the in-memory store. Sessions do not survive a
//! restart; users simply sign in again.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::PortalConfig;

/// Session cookie name for the portal.
pub const SESSION_COOKIE_NAME: &str = "rd_portal_session";

/// Session expiry time in seconds (8 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 8 * 60 * 60;

/// Create the session layer.
///
/// # Arguments
///
/// * `store` - Session store shared by all requests
/// * `config` - Portal configuration (for determining HTTPS mode)
#[must_use]
pub fn create_session_layer(
    store: MemoryStore,
    config: &PortalConfig,
) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
