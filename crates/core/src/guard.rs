//! Route guard: may the current role stay on the current path?
//!
//! Every authenticated role owns one "home prefix", the section of the portal
//! it is allowed to browse. A few shared prefixes (registration flows) are
//! exempt and open to every authenticated role. Visitors without a role are
//! always sent to the login page.
//!
//! The guard must be consulted on every route transition, not only on the
//! first page load: the role/path pair can change without a full reload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Outcome of a route check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Stay on the current path.
    Allow,
    /// Leave the current path for the given one.
    RedirectTo(String),
}

impl RouteDecision {
    /// Returns true for [`RouteDecision::Allow`].
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(path) => Some(path),
        }
    }
}

/// Error returned when a string does not name an [`UnconfiguredRolePolicy`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid guard policy: {0} (expected fail-open or fail-closed)")]
pub struct PolicyParseError(pub String);

/// What the guard does for a signed-in role that has no home prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnconfiguredRolePolicy {
    /// Allow every path. Matches the dashboard's historical behaviour.
    #[default]
    FailOpen,
    /// Send the user to the login page.
    FailClosed,
}

impl std::str::FromStr for UnconfiguredRolePolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-open" | "open" => Ok(Self::FailOpen),
            "fail-closed" | "closed" => Ok(Self::FailClosed),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}

/// The rule that produced a [`RouteDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    /// No role: redirected to login.
    MissingSession,
    /// Path is inside the role's home section.
    HomeSection,
    /// Path is under a shared exempt prefix.
    ExemptPrefix,
    /// Path is outside the role's home section: redirected home.
    OutsideHome,
    /// Role has no home prefix; the [`UnconfiguredRolePolicy`] decided.
    Unconfigured,
}

/// A decision together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessOutcome {
    pub decision: RouteDecision,
    pub rule: AccessRule,
}

/// Static role → home-prefix table and guard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardRules {
    /// Where visitors without a role are sent.
    pub login_path: String,
    /// One section per role.
    #[serde(default)]
    pub home_prefixes: HashMap<Role, String>,
    /// Prefixes open to every signed-in role.
    #[serde(default)]
    pub exempt_prefixes: Vec<String>,
    /// Behaviour for signed-in roles missing from `home_prefixes`.
    #[serde(default)]
    pub unconfigured_role: UnconfiguredRolePolicy,
}

impl Default for GuardRules {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            home_prefixes: HashMap::new(),
            exempt_prefixes: Vec::new(),
            unconfigured_role: UnconfiguredRolePolicy::default(),
        }
    }
}

impl GuardRules {
    /// Decide whether `role` may remain on `current_path`.
    #[must_use]
    pub fn check(&self, role: Option<Role>, current_path: &str) -> RouteDecision {
        self.evaluate(role, current_path).decision
    }

    /// Like [`GuardRules::check`], also reporting which rule fired.
    #[must_use]
    pub fn evaluate(&self, role: Option<Role>, current_path: &str) -> AccessOutcome {
        let Some(role) = role else {
            return AccessOutcome {
                decision: RouteDecision::RedirectTo(self.login_path.clone()),
                rule: AccessRule::MissingSession,
            };
        };

        let Some(home) = self.home_prefixes.get(&role) else {
            let decision = match self.unconfigured_role {
                UnconfiguredRolePolicy::FailOpen => RouteDecision::Allow,
                UnconfiguredRolePolicy::FailClosed => {
                    RouteDecision::RedirectTo(self.login_path.clone())
                }
            };
            return AccessOutcome {
                decision,
                rule: AccessRule::Unconfigured,
            };
        };

        if current_path.starts_with(home.as_str()) {
            return AccessOutcome {
                decision: RouteDecision::Allow,
                rule: AccessRule::HomeSection,
            };
        }

        if self.is_exempt(current_path) {
            return AccessOutcome {
                decision: RouteDecision::Allow,
                rule: AccessRule::ExemptPrefix,
            };
        }

        AccessOutcome {
            decision: RouteDecision::RedirectTo(home.clone()),
            rule: AccessRule::OutsideHome,
        }
    }

    /// Returns true if `path` is under a shared exempt prefix.
    #[must_use]
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Landing path after login: the role's home prefix, or `/` when the
    /// role has none.
    #[must_use]
    pub fn home_for(&self, role: Option<Role>) -> &str {
        role.and_then(|r| self.home_prefixes.get(&r))
            .map_or("/", String::as_str)
    }
}

/// Side-effecting navigation command supplied by the view layer.
pub trait Navigator {
    /// Move the user to `path`.
    fn navigate(&mut self, path: &str);
}

/// Runs the guard on route transitions and issues redirects through a
/// [`Navigator`].
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard<'a> {
    rules: &'a GuardRules,
}

impl<'a> RouteGuard<'a> {
    /// Create a guard over `rules`.
    #[must_use]
    pub const fn new(rules: &'a GuardRules) -> Self {
        Self { rules }
    }

    /// Check `current_path` for `role`; on a redirect decision, tell the
    /// navigator where to go. The outcome is returned either way.
    pub fn enforce<N: Navigator + ?Sized>(
        &self,
        role: Option<Role>,
        current_path: &str,
        navigator: &mut N,
    ) -> AccessOutcome {
        let outcome = self.rules.evaluate(role, current_path);
        if let RouteDecision::RedirectTo(target) = &outcome.decision {
            navigator.navigate(target);
        }
        outcome
    }
}
