//! Application state shared across handlers.

use std::sync::Arc;

use recruitdesk_core::{PortalLayout, RouteGuard};

use crate::config::PortalConfig;
use crate::services::Authenticator;

/// Application state shared across all handlers.
///
/// Everything in here is immutable after start-up, so handlers share it
/// through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    layout: PortalLayout,
    authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        config: PortalConfig,
        layout: PortalLayout,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                layout,
                authenticator,
            }),
        }
    }

    /// Get the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get the navigation, guard and breadcrumb tables.
    #[must_use]
    pub fn layout(&self) -> &PortalLayout {
        &self.inner.layout
    }

    /// Get a route guard over the layout's rules.
    #[must_use]
    pub fn guard(&self) -> RouteGuard<'_> {
        RouteGuard::new(&self.inner.layout.guard)
    }

    /// Get the injected authenticator.
    #[must_use]
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.inner.authenticator.as_ref()
    }
}
