//! Dashboard page shell.
//!
//! Every page path renders the same shell: header navigation for the
//! signed-in role, breadcrumbs for the path, and the user badge. The route
//! guard runs in front of these routes, so handlers only see permitted paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::Uri,
    middleware,
    routing::get,
};
use recruitdesk_core::Breadcrumb;
use tracing::instrument;

use crate::components::{NavItemView, UserView, build_nav};
use crate::middleware::{RequireSession, route_guard_middleware};
use crate::state::AppState;

/// Page shell template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub user: UserView,
    pub nav: Vec<NavItemView>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub current_path: String,
    /// Landing path of the user's home section.
    pub home: String,
    pub page_title: String,
}

/// Build the guarded page router.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(page))
        .route("/{*path}", get(page))
        .route_layer(middleware::from_fn_with_state(state, route_guard_middleware))
}

/// Render the page shell for the requested path.
///
/// GET / and GET /{*path}
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn page(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    uri: Uri,
) -> PageTemplate {
    let current_path = uri.path();
    let layout = state.layout();

    let nav = build_nav(&layout.resolve_navigation(session.role), current_path);
    let breadcrumbs = layout.resolve_breadcrumbs(current_path);
    let page_title = breadcrumbs
        .iter()
        .find(|crumb| crumb.is_current_page)
        .map_or_else(|| "RecruitDesk".to_string(), |crumb| crumb.label.clone());

    PageTemplate {
        user: UserView::from(&session),
        nav,
        breadcrumbs,
        current_path: current_path.to_string(),
        home: layout.guard.home_for(session.role).to_string(),
        page_title,
    }
}
