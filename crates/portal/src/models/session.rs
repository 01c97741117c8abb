//! Session keys for portal authentication state.
//!
//! The session value itself is [`recruitdesk_core::Session`]; only the keys
//! it is stored under live here.

/// Session keys for portal data.
pub mod keys {
    /// Key for storing the signed-in user.
    pub const CURRENT_SESSION: &str = "current_session";
}
