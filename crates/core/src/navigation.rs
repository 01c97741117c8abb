//! Navigation entries and the role-based navigation resolver.
//!
//! Entries are configured statically per role. Resolution only selects and
//! concatenates: the baseline entries shared by everyone come first, then the
//! entries configured for the caller's role.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Icon identifier resolved to an actual glyph by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    #[default]
    Dashboard,
    Exams,
    QuestionBank,
    Jobs,
    Candidates,
    Colleges,
    Employers,
    Students,
    Placements,
    Results,
    Leads,
    Clients,
    Reports,
    Profile,
    Settings,
}

impl Icon {
    /// Returns the kebab-case identifier, used as a CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Exams => "exams",
            Self::QuestionBank => "question-bank",
            Self::Jobs => "jobs",
            Self::Candidates => "candidates",
            Self::Colleges => "colleges",
            Self::Employers => "employers",
            Self::Students => "students",
            Self::Placements => "placements",
            Self::Results => "results",
            Self::Leads => "leads",
            Self::Clients => "clients",
            Self::Reports => "reports",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }
}

/// Returns true if a link targeting `target` should be highlighted while the
/// user is on `current`.
///
/// The root path only matches itself; every other target also matches any
/// path it prefixes.
///
/// ```
/// use recruitdesk_core::is_active_path;
///
/// assert!(is_active_path("/employer-module", "/employer-module/jobs"));
/// assert!(is_active_path("/", "/"));
/// assert!(!is_active_path("/", "/employer-module"));
/// ```
#[must_use]
pub fn is_active_path(target: &str, current: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    current.starts_with(target)
}

/// A single navigable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Text shown in the menu.
    pub title: String,
    /// Absolute target path.
    pub path: String,
    /// Icon shown next to the title.
    #[serde(default)]
    pub icon: Icon,
}

impl NavLink {
    /// Create a link.
    #[must_use]
    pub fn new(title: &str, path: &str, icon: Icon) -> Self {
        Self {
            title: title.to_string(),
            path: path.to_string(),
            icon,
        }
    }

    /// Returns true if this link is active for `current_path`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_path(&self.path, current_path)
    }
}

/// A titled sub-menu of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Text shown on the group toggle.
    pub title: String,
    /// Links in display order.
    pub children: Vec<NavLink>,
}

/// A menu entry: either a link or a group of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationEntry {
    Link(NavLink),
    Group(NavGroup),
}

impl NavigationEntry {
    /// Shorthand for a link entry.
    #[must_use]
    pub fn link(title: &str, path: &str, icon: Icon) -> Self {
        Self::Link(NavLink::new(title, path, icon))
    }

    /// Shorthand for a group entry.
    #[must_use]
    pub fn group(title: &str, children: Vec<NavLink>) -> Self {
        Self::Group(NavGroup {
            title: title.to_string(),
            children,
        })
    }

    /// Returns the entry title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Link(link) => &link.title,
            Self::Group(group) => &group.title,
        }
    }

    /// A link is active per [`is_active_path`]; a group is active when any
    /// of its children is.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        match self {
            Self::Link(link) => link.is_active(current_path),
            Self::Group(group) => group.children.iter().any(|c| c.is_active(current_path)),
        }
    }

    /// Iterate over every link in the entry (the link itself, or a group's children).
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        let slice = match self {
            Self::Link(link) => std::slice::from_ref(link),
            Self::Group(group) => group.children.as_slice(),
        };
        slice.iter()
    }
}

/// Static role → entries table plus the role-independent baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTable {
    /// Entries every visitor sees, signed in or not.
    pub baseline: Vec<NavigationEntry>,
    /// Entries appended after the baseline for each role.
    #[serde(default)]
    pub roles: HashMap<Role, Vec<NavigationEntry>>,
}

impl NavigationTable {
    /// Resolve the ordered menu for `role`.
    ///
    /// The result always starts with the full baseline. An absent role, or a
    /// role with no configured entries, gets the baseline alone.
    #[must_use]
    pub fn resolve(&self, role: Option<Role>) -> Vec<NavigationEntry> {
        let role_entries = role
            .and_then(|r| self.roles.get(&r))
            .map_or(&[][..], Vec::as_slice);

        self.baseline
            .iter()
            .chain(role_entries)
            .cloned()
            .collect()
    }

    /// Returns true if `role` has its own entries in the table.
    #[must_use]
    pub fn is_configured(&self, role: Role) -> bool {
        self.roles.contains_key(&role)
    }
}
