//! Session-stored identity.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::role::Role;

/// The signed-in user as seen by the resolvers.
///
/// Created by the host's authenticator on successful login and destroyed on
/// logout. `role` is optional because a session may exist before a role has
/// been assigned; the route guard treats such a session like no session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Access tier, if assigned.
    pub role: Option<Role>,
    /// Name shown in the header.
    pub display_name: String,
    /// Login email address.
    pub email: Email,
    /// Avatar image reference (URL or static asset path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Session {
    /// Returns the role the guard and navigation resolver should act on.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Initials derived from the display name, used when no avatar is set.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
