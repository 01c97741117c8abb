//! RecruitDesk portal library.
//!
//! The dashboard host: password login into a cookie session, a route guard
//! confining each role to its home section, and a page shell rendering the
//! role's header navigation and breadcrumbs. Built as a library so the
//! integration tests can drive the full router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
