//! Authentication service.
//!
//! Login is delegated to an injected [`Authenticator`], which turns submitted
//! credentials into a typed [`Session`] or an [`AuthError`]. The bundled
//! [`DirectoryAuthenticator`] verifies Argon2id hashes from a YAML user
//! directory; passwords are never compared in plaintext.

mod error;

pub use error::AuthError;

use std::path::Path;
use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use recruitdesk_core::{Email, Session};
use secrecy::{ExposeSecret, SecretString};

use crate::models::UserDirectory;

/// Minimum password length accepted by [`hash_password`].
const MIN_PASSWORD_LENGTH: usize = 10;

/// Turns login credentials into a session.
pub trait Authenticator: Send + Sync {
    /// Authenticate `email` / `password`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for malformed addresses and
    /// `AuthError::InvalidCredentials` for unknown accounts or wrong passwords.
    fn authenticate(&self, email: &str, password: &SecretString) -> Result<Session, AuthError>;
}

/// Authenticator backed by a [`UserDirectory`].
#[derive(Debug, Clone, Default)]
pub struct DirectoryAuthenticator {
    directory: UserDirectory,
}

impl DirectoryAuthenticator {
    /// Wrap an already-parsed directory.
    #[must_use]
    pub const fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }

    /// Load the directory from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::DirectoryIo` if the file cannot be read and
    /// `AuthError::DirectoryFormat` if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AuthError::DirectoryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let directory: UserDirectory =
            serde_yaml::from_str(&raw).map_err(|source| AuthError::DirectoryFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(directory))
    }

    /// Number of accounts in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directory.users.len()
    }

    /// Returns true if the directory has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directory.users.is_empty()
    }
}

impl Authenticator for DirectoryAuthenticator {
    fn authenticate(&self, email: &str, password: &SecretString) -> Result<Session, AuthError> {
        let email = Email::parse(email)?;
        let Some(user) = self.directory.find(&email) else {
            if let Some(hash) = unknown_account_hash() {
                let _ = verify_password(password.expose_secret(), hash);
            }
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password.expose_secret(), &user.password_hash)?;

        Ok(user.to_session())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id for storage in the user directory.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short and
/// `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &SecretString) -> Result<String, AuthError> {
    let password = password.expose_secret();
    validate_password(password)?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Argon2id hash checked in place of a missing account, so a miss costs the
/// same as a wrong password.
fn unknown_account_hash() -> Option<&'static str> {
    static HASH: OnceLock<Option<String>> = OnceLock::new();
    HASH.get_or_init(|| {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(b"recruitdesk-unknown-account", &salt)
            .map(|hash| hash.to_string())
            .ok()
    })
    .as_deref()
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use recruitdesk_core::Role;

    use crate::models::DirectoryUser;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    fn authenticator() -> DirectoryAuthenticator {
        let hash = hash_password(&secret("correct horse battery")).unwrap();
        DirectoryAuthenticator::new(UserDirectory {
            users: vec![DirectoryUser {
                email: Email::parse("tpo@campus.edu").unwrap(),
                display_name: "Campus TPO".to_string(),
                role: Some(Role::College),
                avatar: None,
                password_hash: hash,
            }],
        })
    }

    #[test]
    fn test_hash_password_rejects_short() {
        assert!(matches!(
            hash_password(&secret("short")),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_hash_is_argon2id_phc() {
        let hash = hash_password(&secret("long enough password")).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("long enough password", &hash).is_ok());
        assert!(verify_password("another password", &hash).is_err());
    }

    #[test]
    fn test_authenticate_success() {
        let session = authenticator()
            .authenticate("TPO@Campus.edu", &secret("correct horse battery"))
            .unwrap();
        assert_eq!(session.role, Some(Role::College));
        assert_eq!(session.display_name, "Campus TPO");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        assert!(matches!(
            authenticator().authenticate("tpo@campus.edu", &secret("wrong horse battery")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_user_is_indistinguishable() {
        assert!(matches!(
            authenticator().authenticate("nobody@campus.edu", &secret("correct horse battery")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_unknown_account_hash_matches_stored_hash_params() {
        let dummy = PasswordHash::new(unknown_account_hash().unwrap()).unwrap();
        let stored_hash = hash_password(&secret("correct horse battery")).unwrap();
        let stored = PasswordHash::new(&stored_hash).unwrap();

        assert_eq!(dummy.algorithm, stored.algorithm);
        assert_eq!(dummy.version, stored.version);
        assert_eq!(dummy.params, stored.params);
        assert!(verify_password("correct horse battery", unknown_account_hash().unwrap()).is_err());
    }

    #[test]
    fn test_authenticate_malformed_email() {
        assert!(matches!(
            authenticator().authenticate("not-an-email", &secret("whatever")),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_corrupt_hash_is_invalid_credentials() {
        let auth = DirectoryAuthenticator::new(UserDirectory {
            users: vec![DirectoryUser {
                email: Email::parse("x@acme.io").unwrap(),
                display_name: "X".to_string(),
                role: None,
                avatar: None,
                password_hash: "plaintext".to_string(),
            }],
        });
        assert!(matches!(
            auth.authenticate("x@acme.io", &secret("plaintext")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let err = DirectoryAuthenticator::from_file(Path::new("/nonexistent/users.yaml"))
            .unwrap_err();
        assert!(matches!(err, AuthError::DirectoryIo { .. }));
    }
}
