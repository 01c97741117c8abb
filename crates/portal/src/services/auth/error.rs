//! Authentication error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during portal authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] recruitdesk_core::EmailError),

    /// Wrong password or unknown account. Deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password too weak to hash into the directory.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// The user directory file could not be read.
    #[error("cannot read user directory {path}: {source}")]
    DirectoryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The user directory file is not valid YAML for a directory.
    #[error("malformed user directory {path}: {source}")]
    DirectoryFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
