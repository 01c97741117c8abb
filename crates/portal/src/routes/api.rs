//! JSON API for client-side shells.
//!
//! The navigation and session endpoints need a signed-in user; breadcrumbs
//! depend on the path alone and are public.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use recruitdesk_core::{Breadcrumb, Role, Session};
use serde::{Deserialize, Serialize};

use crate::components::{NavItemView, build_nav};
use crate::middleware::RequireSession;
use crate::state::AppState;

/// Query carrying the path being viewed. Defaults to `/`.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    "/".to_string()
}

/// Response for `GET /api/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub role: Option<Role>,
    pub display_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub initials: String,
    /// Landing path of the role's home section.
    pub home: String,
}

impl SessionResponse {
    fn new(session: Session, home: &str) -> Self {
        Self {
            role: session.role,
            initials: session.initials(),
            display_name: session.display_name,
            email: session.email.to_string(),
            avatar: session.avatar,
            home: home.to_string(),
        }
    }
}

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/session", get(current_session))
        .route("/api/navigation", get(navigation))
        .route("/api/breadcrumbs", get(breadcrumbs))
}

/// GET /api/session
async fn current_session(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
) -> Json<SessionResponse> {
    let home = state.layout().guard.home_for(session.role).to_string();
    Json(SessionResponse::new(session, &home))
}

/// GET /api/navigation?path=
async fn navigation(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Query(query): Query<PathQuery>,
) -> Json<Vec<NavItemView>> {
    let entries = state.layout().resolve_navigation(session.role);
    Json(build_nav(&entries, &query.path))
}

/// GET /api/breadcrumbs?path=
async fn breadcrumbs(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<Vec<Breadcrumb>> {
    Json(state.layout().resolve_breadcrumbs(&query.path))
}
