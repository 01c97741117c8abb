//! Authentication extractors for the portal.
//!
//! Provides extractors for requiring a signed-in user in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use recruitdesk_core::Session;
use tower_sessions::Session as HttpSession;

use crate::services::current_or_none;
use crate::state::AppState;

/// Extractor that requires a signed-in user.
///
/// If nobody is signed in, returns a redirect to the layout's login page for
/// HTML requests, or 401 Unauthorized for API requests.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSession(session): RequireSession,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", session.display_name)
/// }
/// ```
pub struct RequireSession(pub Session);

/// Error returned when a session is required but nobody is signed in.
#[derive(Debug)]
pub enum SessionRejection {
    /// Redirect to the login page (for HTML requests).
    RedirectToLogin(String),
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin(login_path) => Redirect::to(&login_path).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_api = parts.uri.path().starts_with("/api/");
        let rejection = || {
            if is_api {
                SessionRejection::Unauthorized
            } else {
                SessionRejection::RedirectToLogin(state.layout().guard.login_path.clone())
            }
        };

        // Get the session store handle from extensions (set by SessionManagerLayer)
        let store = parts
            .extensions
            .get::<HttpSession>()
            .cloned()
            .ok_or(SessionRejection::Unauthorized)?;

        let session = current_or_none(&store).await.ok_or_else(rejection)?;

        Ok(Self(session))
    }
}

/// Extractor that optionally gets the signed-in user.
///
/// Unlike `RequireSession`, this does not reject the request if nobody is
/// signed in.
pub struct OptionalSession(pub Option<Session>);

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = match parts.extensions.get::<HttpSession>().cloned() {
            Some(store) => current_or_none(&store).await,
            None => None,
        };

        Ok(Self(session))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use super::*;

    #[test]
    fn test_redirect_rejection_uses_given_login_path() {
        let response = SessionRejection::RedirectToLogin("/sign-in".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
            Some(b"/sign-in".as_slice())
        );
    }

    #[test]
    fn test_api_rejection_is_unauthorized() {
        assert_eq!(
            SessionRejection::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
