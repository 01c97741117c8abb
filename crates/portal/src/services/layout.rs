//! Loading the portal layout.

use std::path::{Path, PathBuf};

use recruitdesk_core::{LayoutError, PortalLayout, UnconfiguredRolePolicy};
use thiserror::Error;

/// Errors loading a layout file.
#[derive(Debug, Error)]
pub enum LayoutLoadError {
    #[error("cannot read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed layout {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid layout: {0}")]
    Invalid(#[from] LayoutError),
    #[error("guard.login_path {0:?} collides with a built-in portal route")]
    ReservedLoginPath(String),
}

/// Routes the portal mounts regardless of layout.
const RESERVED_ROUTES: &[&str] = &["/health", "/logout"];

/// The login page is mounted next to the portal's own routes, so it cannot
/// shadow one of them or sit under the API.
fn check_login_route(layout: &PortalLayout) -> Result<(), LayoutLoadError> {
    let login = layout.guard.login_path.trim_end_matches('/');
    if RESERVED_ROUTES.contains(&login) || login == "/api" || login.starts_with("/api/") {
        return Err(LayoutLoadError::ReservedLoginPath(
            layout.guard.login_path.clone(),
        ));
    }
    Ok(())
}

/// Parse and validate a layout from YAML text.
///
/// # Errors
///
/// Returns `LayoutLoadError::Format` on parse errors and
/// `LayoutLoadError::Invalid` if validation fails.
pub fn parse_layout(yaml: &str, origin: &Path) -> Result<PortalLayout, LayoutLoadError> {
    let layout: PortalLayout =
        serde_yaml::from_str(yaml).map_err(|source| LayoutLoadError::Format {
            path: origin.to_path_buf(),
            source,
        })?;
    layout.validate()?;
    check_login_route(&layout)?;
    Ok(layout)
}

/// Load the layout from `path`, or the built-in layout when `path` is `None`,
/// then apply the policy override if one is given.
///
/// # Errors
///
/// Returns a `LayoutLoadError` if the file cannot be read, parsed or validated.
pub fn load_layout(
    path: Option<&Path>,
    policy: Option<UnconfiguredRolePolicy>,
) -> Result<PortalLayout, LayoutLoadError> {
    let layout = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| LayoutLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_layout(&raw, path)?
        }
        None => PortalLayout::default(),
    };

    let layout = match policy {
        Some(policy) => layout.with_policy(policy),
        None => layout,
    };

    for role in layout.unconfigured_roles() {
        tracing::warn!(
            %role,
            policy = ?layout.guard.unconfigured_role,
            "Role has no home prefix; the unconfigured-role policy applies"
        );
    }

    Ok(layout)
}
