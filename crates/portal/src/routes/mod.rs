//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Auth (mounted at the layout's login path, `/login` by default)
//! GET  /login                  - Login page
//! POST /login                  - Password login
//! POST /logout                 - Logout
//!
//! # JSON API
//! GET  /api/session            - Signed-in user (401 without a session)
//! GET  /api/navigation?path=   - Header navigation with active flags (401 without a session)
//! GET  /api/breadcrumbs?path=  - Breadcrumb trail (public)
//!
//! # Pages (route guard applies)
//! GET  /                       - Page shell
//! GET  /{*path}                - Page shell
//! ```

pub mod api;
pub mod auth;
pub mod pages;

use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tower_sessions::MemoryStore;
use tracing::Span;

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Build the application router without layers or state.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::router(&state.layout().guard.login_path))
        .merge(api::router())
        .merge(pages::router(state.clone()))
}

/// Build the complete application: routes, sessions, security headers,
/// request IDs and request tracing.
///
/// Sentry layers are added by the binary so tests can run without a client.
pub fn app(state: AppState, store: MemoryStore) -> Router {
    let session_layer = create_session_layer(store, state.config());

    routes(&state)
        .layer(session_layer)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
