//! Layout file commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the built-in layout as a starting point
//! rd-cli layout dump > portal.yaml
//!
//! # Check an edited layout before deploying it
//! rd-cli layout validate portal.yaml
//! ```

use std::path::Path;

use recruitdesk_core::{PortalLayout, Role, UnconfiguredRolePolicy};
use recruitdesk_portal::services::load_layout;
use serde::Serialize;

use super::CliError;

/// Summary printed by `rd-cli layout validate`.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub configured_roles: Vec<Role>,
    pub unconfigured_roles: Vec<Role>,
    pub unconfigured_role_policy: UnconfiguredRolePolicy,
    pub breadcrumb_labels: usize,
}

/// Parse and validate a layout file.
pub fn validate(file: &Path) -> Result<ValidationReport, CliError> {
    let layout = load_layout(Some(file), None)?;

    let mut configured_roles: Vec<Role> = layout.guard.home_prefixes.keys().copied().collect();
    configured_roles.sort();

    Ok(ValidationReport {
        file: file.display().to_string(),
        configured_roles,
        unconfigured_roles: layout.unconfigured_roles(),
        unconfigured_role_policy: layout.guard.unconfigured_role,
        breadcrumb_labels: layout.breadcrumbs.labels.len(),
    })
}

/// The built-in layout.
#[must_use]
pub fn dump() -> PortalLayout {
    PortalLayout::default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_is_valid() {
        assert!(dump().validate().is_ok());
    }

    #[test]
    fn test_validate_dumped_layout() {
        let path = std::env::temp_dir().join(format!("rd-cli-layout-{}.yaml", std::process::id()));
        std::fs::write(&path, serde_yaml::to_string(&dump()).unwrap()).unwrap();

        let report = validate(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(report.configured_roles, Role::ALL.to_vec());
        assert!(report.unconfigured_roles.is_empty());
        assert_eq!(report.unconfigured_role_policy, UnconfiguredRolePolicy::FailOpen);
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let path =
            std::env::temp_dir().join(format!("rd-cli-bad-layout-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "navigation:\n  baseline:\n    - kind: link\n      title: Home\n      path: home\nguard:\n  login_path: /login\n",
        )
        .unwrap();

        let result = validate(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(CliError::Layout(_))));
    }
}
