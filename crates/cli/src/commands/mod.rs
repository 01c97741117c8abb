//! Subcommand implementations.
//!
//! Each command returns a serializable report; `main` picks the output format.

pub mod layout;
pub mod password;
pub mod resolve;

use recruitdesk_portal::services::{AuthError, LayoutLoadError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutLoadError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("failed to read from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
