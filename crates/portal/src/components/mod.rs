//! View models shared by page templates and the JSON API.

pub mod nav;

pub use nav::{NavItemView, NavLinkView, UserView, build_nav};
