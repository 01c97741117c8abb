//! Route guard middleware for dashboard pages.
//!
//! Runs the layout's [`RouteGuard`](recruitdesk_core::RouteGuard) on every
//! page request and turns a redirect decision into an HTTP redirect. The
//! signed-in role is read from the session; no session means no role.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use recruitdesk_core::{AccessRule, Navigator, RouteDecision};
use tower_sessions::Session as HttpSession;

use crate::services::current_or_none;
use crate::state::AppState;

/// Collects the redirect target issued by the guard.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: Option<String>,
}

impl RedirectNavigator {
    /// The path the guard navigated to, if any.
    #[must_use]
    pub fn into_target(self) -> Option<String> {
        self.target
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}

/// Enforce the route guard for the requested path.
pub async fn route_guard_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let store = request.extensions().get::<HttpSession>().cloned();
    let session = match store {
        Some(store) => current_or_none(&store).await,
        None => None,
    };
    let role = session.as_ref().and_then(recruitdesk_core::Session::role);

    let mut navigator = RedirectNavigator::default();
    let outcome = state.guard().enforce(role, &path, &mut navigator);

    match (outcome.rule, &outcome.decision) {
        (AccessRule::Unconfigured, RouteDecision::Allow) => {
            tracing::warn!(
                path = %path,
                role = ?role,
                "Role has no home section; access granted by fail-open policy"
            );
        }
        (rule, decision) => {
            tracing::debug!(path = %path, role = ?role, ?rule, ?decision, "Route guard decision");
        }
    }

    match navigator.into_target() {
        Some(target) => Redirect::to(&target).into_response(),
        None => next.run(request).await,
    }
}
