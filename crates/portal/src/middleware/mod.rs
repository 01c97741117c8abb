//! HTTP middleware stack for the portal.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers
//! 5. Session layer (tower-sessions with in-memory store)
//! 6. Route guard (page routes only; runs on every request)

pub mod auth;
pub mod request_id;
pub mod route_guard;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalSession, RequireSession, SessionRejection};
pub use request_id::request_id_middleware;
pub use route_guard::route_guard_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
