//! User directory records.
//!
//! The directory is a YAML file listing every account that may sign in:
//!
//! ```yaml
//! users:
//!   - email: hr@acme.io
//!     display_name: Acme Hiring
//!     role: employer
//!     avatar: /static/avatars/acme.png
//!     password_hash: "$argon2id$v=19$m=19456,t=2,p=1$..."
//! ```

use recruitdesk_core::{Email, Role, Session};
use serde::Deserialize;

/// One account in the user directory.
#[derive(Clone, Deserialize)]
pub struct DirectoryUser {
    /// Login email address.
    pub email: Email,
    /// Name shown in the header.
    pub display_name: String,
    /// Access tier; accounts without one can sign in but see the baseline menu only.
    #[serde(default)]
    pub role: Option<Role>,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl std::fmt::Debug for DirectoryUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryUser")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("avatar", &self.avatar)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl DirectoryUser {
    /// Build the session stored after a successful login.
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session {
            role: self.role,
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// The parsed user directory file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDirectory {
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
}

impl UserDirectory {
    /// Find an account by email.
    #[must_use]
    pub fn find(&self, email: &Email) -> Option<&DirectoryUser> {
        self.users.iter().find(|u| &u.email == email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DIRECTORY: &str = r#"
users:
  - email: hr@Acme.io
    display_name: Acme Hiring
    role: employer
    password_hash: "$argon2id$stub"
  - email: pending@campus.edu
    display_name: Pending College
    password_hash: "$argon2id$stub"
"#;

    #[test]
    fn test_parse_directory() {
        let dir: UserDirectory = serde_yaml::from_str(DIRECTORY).unwrap();
        assert_eq!(dir.users.len(), 2);

        let hr = dir.find(&Email::parse("hr@acme.io").unwrap()).unwrap();
        assert_eq!(hr.role, Some(Role::Employer));
        assert_eq!(hr.avatar, None);

        let pending = dir
            .find(&Email::parse("pending@campus.edu").unwrap())
            .unwrap();
        assert_eq!(pending.role, None);
    }

    #[test]
    fn test_to_session() {
        let dir: UserDirectory = serde_yaml::from_str(DIRECTORY).unwrap();
        let session = dir.users.first().unwrap().to_session();
        assert_eq!(session.role, Some(Role::Employer));
        assert_eq!(session.display_name, "Acme Hiring");
        assert_eq!(session.email.as_str(), "hr@acme.io");
    }

    #[test]
    fn test_debug_redacts_hash() {
        let dir: UserDirectory = serde_yaml::from_str(DIRECTORY).unwrap();
        let debug_output = format!("{:?}", dir.users.first().unwrap());
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("argon2id"));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let yaml = r#"
users:
  - email: x@y.z
    display_name: X
    role: recruiter
    password_hash: h
"#;
        assert!(serde_yaml::from_str::<UserDirectory>(yaml).is_err());
    }
}
