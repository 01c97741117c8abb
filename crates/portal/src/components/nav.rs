//! Header navigation and user badge view models.

use recruitdesk_core::{NavLink, NavigationEntry, Session};
use serde::Serialize;

/// A single clickable link in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub title: String,
    pub href: String,
    pub icon: &'static str,
    pub active: bool,
}

impl NavLinkView {
    fn from_link(link: &NavLink, current_path: &str) -> Self {
        Self {
            title: link.title.clone(),
            href: link.path.clone(),
            icon: link.icon.as_str(),
            active: link.is_active(current_path),
        }
    }
}

/// A top-level header item: either a link or a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemView {
    pub title: String,
    /// Link target; `None` for groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// A group is active when any child is.
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavLinkView>,
}

impl NavItemView {
    /// Returns true for dropdown groups.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.href.is_none()
    }

    fn from_entry(entry: &NavigationEntry, current_path: &str) -> Self {
        match entry {
            NavigationEntry::Link(link) => {
                let view = NavLinkView::from_link(link, current_path);
                Self {
                    title: view.title,
                    href: Some(view.href),
                    icon: Some(view.icon),
                    active: view.active,
                    children: Vec::new(),
                }
            }
            NavigationEntry::Group(group) => {
                let children: Vec<NavLinkView> = group
                    .children
                    .iter()
                    .map(|child| NavLinkView::from_link(child, current_path))
                    .collect();
                Self {
                    title: group.title.clone(),
                    href: None,
                    icon: None,
                    active: children.iter().any(|c| c.active),
                    children,
                }
            }
        }
    }
}

/// Build the header items for `entries`, marking those active for `current_path`.
#[must_use]
pub fn build_nav(entries: &[NavigationEntry], current_path: &str) -> Vec<NavItemView> {
    entries
        .iter()
        .map(|entry| NavItemView::from_entry(entry, current_path))
        .collect()
}

/// Signed-in user badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub display_name: String,
    pub email: String,
    pub initials: String,
    pub avatar: Option<String>,
    /// Role label, empty when the account has no role.
    pub role: String,
}

impl From<&Session> for UserView {
    fn from(session: &Session) -> Self {
        Self {
            display_name: session.display_name.clone(),
            email: session.email.to_string(),
            initials: session.initials(),
            avatar: session.avatar.clone(),
            role: session.role.map(|r| r.to_string()).unwrap_or_default(),
        }
    }
}
