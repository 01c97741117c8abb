//! RecruitDesk Core - Navigation and access resolvers.
//!
//! This crate holds the rule-based part of the RecruitDesk dashboard:
//! - [`navigation`] - which menu entries a role sees, and which are active
//! - [`guard`] - whether a role may stay on a path, or where to send it
//! - [`breadcrumbs`] - the path trail shown above page content
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no session
//! storage, no HTTP. Every resolver is a function of the static
//! [`layout::PortalLayout`] tables plus `(role, path)`, so the same inputs
//! always produce the same output. Session state is supplied by the host.
//!
//! # Modules
//!
//! - [`types`] - `Role`, `Email` and the session-stored `Session`
//! - [`layout`] - the static role configuration and its built-in defaults

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod breadcrumbs;
pub mod guard;
pub mod layout;
pub mod navigation;
pub mod types;

pub use breadcrumbs::{Breadcrumb, BreadcrumbLabels};
pub use guard::{
    AccessOutcome, AccessRule, GuardRules, Navigator, PolicyParseError, RouteDecision,
    RouteGuard, UnconfiguredRolePolicy,
};
pub use layout::{LayoutError, PortalLayout};
pub use navigation::{Icon, NavGroup, NavLink, NavigationEntry, NavigationTable, is_active_path};
pub use types::*;
