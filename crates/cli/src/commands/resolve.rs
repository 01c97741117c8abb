//! Resolver commands: navigation, access checks and breadcrumbs.
//!
//! # Usage
//!
//! ```bash
//! rd-cli nav --role employer --path /employer-module/jobs
//! rd-cli check --role college --path /admin-module/users
//! rd-cli check --role sales --path /sales-module --layout portal.yaml --fail-closed
//! rd-cli breadcrumbs /dashboard/admin
//! ```

use std::path::Path;

use recruitdesk_core::{AccessRule, Breadcrumb, Role, UnconfiguredRolePolicy};
use recruitdesk_portal::components::{NavItemView, build_nav};
use recruitdesk_portal::services::load_layout;
use serde::Serialize;

use super::CliError;

/// Header navigation for a role at a path.
pub fn nav(
    role: Option<Role>,
    path: &str,
    layout_file: Option<&Path>,
) -> Result<Vec<NavItemView>, CliError> {
    let layout = load_layout(layout_file, None)?;
    Ok(build_nav(&layout.resolve_navigation(role), path))
}

/// Result of `rd-cli check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub role: Option<Role>,
    pub path: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    pub rule: AccessRule,
}

/// Run the route guard for `role` on `path`.
pub fn check(
    role: Option<Role>,
    path: &str,
    layout_file: Option<&Path>,
    fail_closed: bool,
) -> Result<CheckReport, CliError> {
    let policy = fail_closed.then_some(UnconfiguredRolePolicy::FailClosed);
    let layout = load_layout(layout_file, policy)?;
    let outcome = layout.guard.evaluate(role, path);

    tracing::debug!(?role, path, rule = ?outcome.rule, "Evaluated route access");

    Ok(CheckReport {
        role,
        path: path.to_string(),
        allowed: outcome.decision.is_allowed(),
        redirect_to: outcome.decision.redirect_target().map(str::to_string),
        rule: outcome.rule,
    })
}

/// Breadcrumb trail for a path.
pub fn breadcrumbs(path: &str, layout_file: Option<&Path>) -> Result<Vec<Breadcrumb>, CliError> {
    let layout = load_layout(layout_file, None)?;
    Ok(layout.resolve_breadcrumbs(path))
}
