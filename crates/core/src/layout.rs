//! Static role configuration.
//!
//! A [`PortalLayout`] bundles the three tables the resolvers read: the
//! navigation table, the guard rules and the breadcrumb labels. The built-in
//! [`PortalLayout::default`] describes the recruitment portal; hosts may load
//! a replacement from a file and must [`validate`](PortalLayout::validate) it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::breadcrumbs::{Breadcrumb, BreadcrumbLabels};
use crate::guard::{GuardRules, RouteDecision, UnconfiguredRolePolicy};
use crate::navigation::{Icon, NavLink, NavigationEntry, NavigationTable};
use crate::types::Role;

/// Errors found while validating a layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A configured path does not start with `/`.
    #[error("{context}: path must be absolute, got {path:?}")]
    RelativePath {
        /// Where the path was found.
        context: String,
        /// The offending path.
        path: String,
    },
    /// A navigation entry has an empty title.
    #[error("{context}: navigation entry has an empty title")]
    EmptyTitle {
        /// Where the entry was found.
        context: String,
    },
    /// A navigation group has no children.
    #[error("{context}: group {title:?} has no links")]
    EmptyGroup {
        /// Where the group was found.
        context: String,
        /// Group title.
        title: String,
    },
    /// The login path is `/` or contains route pattern characters.
    #[error("guard.login_path must name a single page other than `/`, got {path:?}")]
    InvalidLoginPath {
        /// The offending path.
        path: String,
    },
    /// A home prefix is empty or just `/`, which would grant every path.
    #[error("home prefix for {role} must name a section, got {prefix:?}")]
    RootHomePrefix {
        /// Role owning the prefix.
        role: Role,
        /// The offending prefix.
        prefix: String,
    },
}

/// The navigation, guard and breadcrumb tables for the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalLayout {
    pub navigation: NavigationTable,
    pub guard: GuardRules,
    #[serde(default)]
    pub breadcrumbs: BreadcrumbLabels,
}

impl PortalLayout {
    /// Menu entries for `role`.
    #[must_use]
    pub fn resolve_navigation(&self, role: Option<Role>) -> Vec<NavigationEntry> {
        self.navigation.resolve(role)
    }

    /// Guard decision for `role` on `current_path`.
    #[must_use]
    pub fn check_route_access(&self, role: Option<Role>, current_path: &str) -> RouteDecision {
        self.guard.check(role, current_path)
    }

    /// Breadcrumb trail for `current_path`.
    #[must_use]
    pub fn resolve_breadcrumbs(&self, current_path: &str) -> Vec<Breadcrumb> {
        self.breadcrumbs.resolve(current_path)
    }

    /// Override the unconfigured-role policy.
    #[must_use]
    pub fn with_policy(mut self, policy: UnconfiguredRolePolicy) -> Self {
        self.guard.unconfigured_role = policy;
        self
    }

    /// Check every configured path and entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_login_path(&self.guard.login_path)?;
        for prefix in &self.guard.exempt_prefixes {
            check_absolute("guard.exempt_prefixes", prefix)?;
        }
        for (role, prefix) in &self.guard.home_prefixes {
            check_absolute(&format!("guard.home_prefixes.{role}"), prefix)?;
            if prefix.trim_end_matches('/').is_empty() {
                return Err(LayoutError::RootHomePrefix {
                    role: *role,
                    prefix: prefix.clone(),
                });
            }
        }

        check_entries("navigation.baseline", &self.navigation.baseline)?;
        for (role, entries) in &self.navigation.roles {
            check_entries(&format!("navigation.roles.{role}"), entries)?;
        }
        Ok(())
    }

    /// Roles that can sign in but have no home prefix, in display order.
    ///
    /// These are governed by the unconfigured-role policy, so hosts should
    /// surface them at start-up.
    #[must_use]
    pub fn unconfigured_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| !self.guard.home_prefixes.contains_key(role))
            .collect()
    }
}

fn check_absolute(context: &str, path: &str) -> Result<(), LayoutError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(LayoutError::RelativePath {
            context: context.to_string(),
            path: path.to_string(),
        })
    }
}

/// The login page is mounted as a literal route, so it must be one
/// concrete path outside the root page.
fn check_login_path(path: &str) -> Result<(), LayoutError> {
    check_absolute("guard.login_path", path)?;
    if path.trim_end_matches('/').is_empty() || path.contains(['{', '}', '*', '?', '#']) {
        return Err(LayoutError::InvalidLoginPath {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn check_link(context: &str, link: &NavLink) -> Result<(), LayoutError> {
    if link.title.trim().is_empty() {
        return Err(LayoutError::EmptyTitle {
            context: context.to_string(),
        });
    }
    check_absolute(context, &link.path)
}

fn check_entries(context: &str, entries: &[NavigationEntry]) -> Result<(), LayoutError> {
    for entry in entries {
        match entry {
            NavigationEntry::Link(link) => check_link(context, link)?,
            NavigationEntry::Group(group) => {
                if group.title.trim().is_empty() {
                    return Err(LayoutError::EmptyTitle {
                        context: context.to_string(),
                    });
                }
                if group.children.is_empty() {
                    return Err(LayoutError::EmptyGroup {
                        context: context.to_string(),
                        title: group.title.clone(),
                    });
                }
                for child in &group.children {
                    check_link(context, child)?;
                }
            }
        }
    }
    Ok(())
}

// =============================================================================
// Built-in recruitment portal layout
// =============================================================================

fn link(title: &str, path: &str, icon: Icon) -> NavLink {
    NavLink::new(title, path, icon)
}

fn admin_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "/admin-module/dashboard", Icon::Dashboard),
        NavigationEntry::group(
            "Exams",
            vec![
                link("All Exams", "/admin-module/exams", Icon::Exams),
                link("Question Bank", "/admin-module/question-bank", Icon::QuestionBank),
            ],
        ),
        NavigationEntry::group(
            "Users",
            vec![
                link("Colleges", "/admin-module/colleges", Icon::Colleges),
                link("Employers", "/admin-module/employers", Icon::Employers),
                link("Candidates", "/admin-module/candidates", Icon::Candidates),
            ],
        ),
        NavigationEntry::link("Reports", "/admin-module/reports", Icon::Reports),
    ]
}

fn college_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "/college-module/dashboard", Icon::Dashboard),
        NavigationEntry::link("Students", "/college-module/students", Icon::Students),
        NavigationEntry::link("Exams", "/college-module/exams", Icon::Exams),
        NavigationEntry::link("Placements", "/college-module/placements", Icon::Placements),
    ]
}

fn candidate_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "/candidate-module/dashboard", Icon::Dashboard),
        NavigationEntry::link("Jobs", "/candidate-module/jobs", Icon::Jobs),
        NavigationEntry::group(
            "Exams",
            vec![
                link("My Exams", "/candidate-module/exams", Icon::Exams),
                link("Results", "/candidate-module/results", Icon::Results),
            ],
        ),
        NavigationEntry::link("Profile", "/candidate-module/profile", Icon::Profile),
    ]
}

fn employer_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "/employer-module/dashboard", Icon::Dashboard),
        NavigationEntry::group(
            "Jobs",
            vec![
                link("Job Posts", "/employer-module/jobs", Icon::Jobs),
                link("Post a Job", "/employer-module/post-job", Icon::Jobs),
            ],
        ),
        NavigationEntry::link("Candidates", "/employer-module/candidates", Icon::Candidates),
        NavigationEntry::link("Exams", "/employer-module/exams", Icon::Exams),
    ]
}

fn sales_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::link("Dashboard", "/sales-module/dashboard", Icon::Dashboard),
        NavigationEntry::link("Leads", "/sales-module/leads", Icon::Leads),
        NavigationEntry::link("Clients", "/sales-module/clients", Icon::Clients),
        NavigationEntry::link("Reports", "/sales-module/reports", Icon::Reports),
    ]
}

const BREADCRUMB_LABELS: &[(&str, &str)] = &[
    ("admin-module", "Admin"),
    ("college-module", "College"),
    ("candidate-module", "Candidate"),
    ("employer-module", "Employer"),
    ("sales-module", "Sales"),
    ("dashboard", "Dashboard"),
    ("admin", "Admin Dashboard"),
    ("exams", "Exams"),
    ("question-bank", "Question Bank"),
    ("colleges", "Colleges"),
    ("employers", "Employers"),
    ("candidates", "Candidates"),
    ("students", "Students"),
    ("placements", "Placements"),
    ("jobs", "Jobs"),
    ("post-job", "Post a Job"),
    ("results", "Results"),
    ("profile", "Profile"),
    ("leads", "Leads"),
    ("clients", "Clients"),
    ("reports", "Reports"),
    ("registration", "Registration"),
];

impl Default for PortalLayout {
    fn default() -> Self {
        let roles: HashMap<Role, Vec<NavigationEntry>> = [
            (Role::Admin, admin_navigation()),
            (Role::College, college_navigation()),
            (Role::Candidate, candidate_navigation()),
            (Role::Employer, employer_navigation()),
            (Role::Sales, sales_navigation()),
        ]
        .into_iter()
        .collect();

        let home_prefixes: HashMap<Role, String> = [
            (Role::Admin, "/admin-module"),
            (Role::College, "/college-module"),
            (Role::Candidate, "/candidate-module"),
            (Role::Employer, "/employer-module"),
            (Role::Sales, "/sales-module"),
        ]
        .into_iter()
        .map(|(role, prefix)| (role, prefix.to_string()))
        .collect();

        Self {
            navigation: NavigationTable {
                baseline: vec![NavigationEntry::link("Home", "/", Icon::Home)],
                roles,
            },
            guard: GuardRules {
                login_path: "/login".to_string(),
                home_prefixes,
                exempt_prefixes: vec!["/registration".to_string()],
                unconfigured_role: UnconfiguredRolePolicy::FailOpen,
            },
            breadcrumbs: BreadcrumbLabels::from_pairs(BREADCRUMB_LABELS.iter().copied()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = PortalLayout::default();
        assert_eq!(layout.validate(), Ok(()));
        assert!(layout.unconfigured_roles().is_empty());
    }

    #[test]
    fn test_default_role_links_stay_inside_home_section() {
        // Every role-specific link must survive the guard, or the menu would
        // offer links that immediately redirect.
        let layout = PortalLayout::default();
        for role in Role::ALL {
            for entry in layout.navigation.roles.get(&role).unwrap() {
                for link in entry.links() {
                    assert!(
                        layout.check_route_access(Some(role), &link.path).is_allowed(),
                        "{role}: {} is outside the home section",
                        link.path
                    );
                }
            }
        }
    }

    #[test]
    fn test_dashboard_admin_breadcrumb() {
        let trail = PortalLayout::default().resolve_breadcrumbs("/dashboard/admin");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.last().unwrap().label, "Admin Dashboard");
    }

    #[test]
    fn test_validate_relative_link() {
        let mut layout = PortalLayout::default();
        layout
            .navigation
            .baseline
            .push(NavigationEntry::link("Help", "help", Icon::Settings));
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::RelativePath { ref path, .. }) if path == "help"
        ));
    }

    #[test]
    fn test_validate_custom_login_path() {
        let mut layout = PortalLayout::default();
        layout.guard.login_path = "/sign-in".to_string();
        assert!(layout.validate().is_ok());

        for path in ["/", "/{page}", "/auth/*rest", "/login?next=/"] {
            layout.guard.login_path = path.to_string();
            assert!(
                matches!(layout.validate(), Err(LayoutError::InvalidLoginPath { .. })),
                "{path}"
            );
        }

        layout.guard.login_path = "sign-in".to_string();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::RelativePath { .. })
        ));
    }

    #[test]
    fn test_validate_empty_group() {
        let mut layout = PortalLayout::default();
        layout
            .navigation
            .roles
            .insert(Role::Sales, vec![NavigationEntry::group("Pipeline", vec![])]);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::EmptyGroup { ref title, .. }) if title == "Pipeline"
        ));
    }

    #[test]
    fn test_validate_root_home_prefix() {
        let mut layout = PortalLayout::default();
        layout.guard.home_prefixes.insert(Role::Sales, "/".to_string());
        assert_eq!(
            layout.validate(),
            Err(LayoutError::RootHomePrefix {
                role: Role::Sales,
                prefix: "/".to_string()
            })
        );
    }

    #[test]
    fn test_unconfigured_roles() {
        let mut layout = PortalLayout::default();
        layout.guard.home_prefixes.remove(&Role::College);
        assert_eq!(layout.unconfigured_roles(), vec![Role::College]);
    }

    #[test]
    fn test_with_policy() {
        let layout = PortalLayout::default().with_policy(UnconfiguredRolePolicy::FailClosed);
        assert_eq!(
            layout.guard.unconfigured_role,
            UnconfiguredRolePolicy::FailClosed
        );
    }

    #[test]
    fn test_json_round_trip_preserves_tables() {
        let layout = PortalLayout::default();
        let json = serde_json::to_string(&layout).unwrap();
        let back: PortalLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }

    fn any_role() -> impl Strategy<Value = Option<Role>> {
        proptest::option::of(proptest::sample::select(Role::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn prop_baseline_is_prefix_of_navigation(role in any_role()) {
            let layout = PortalLayout::default();
            let entries = layout.resolve_navigation(role);
            prop_assert!(entries.starts_with(&layout.navigation.baseline));
        }

        #[test]
        fn prop_resolvers_are_idempotent(role in any_role(), path in "(/[a-z-]{1,12}){0,4}") {
            let layout = PortalLayout::default();
            prop_assert_eq!(layout.resolve_navigation(role), layout.resolve_navigation(role));
            prop_assert_eq!(
                layout.check_route_access(role, &path),
                layout.check_route_access(role, &path)
            );
            prop_assert_eq!(layout.resolve_breadcrumbs(&path), layout.resolve_breadcrumbs(&path));
        }
    }
}
