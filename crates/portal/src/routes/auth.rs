//! Authentication route handlers.
//!
//! Password login against the injected [`Authenticator`](crate::services::Authenticator).
//! Failed logins re-render the form with one generic message so the page
//! never reveals which accounts exist.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use recruitdesk_core::Role;
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session as HttpSession;
use tracing::instrument;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::OptionalSession;
use crate::services::{AuthError, SessionProvider};
use crate::state::AppState;

/// Message shown for any rejected credentials.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Message shown to accounts the guard would send straight back to login.
const NO_ACCESS_MESSAGE: &str = "Your account does not have access to a dashboard yet.";

/// Message shown when a session ended before the user came back.
const SESSION_EXPIRED_MESSAGE: &str = "Your session has ended. Please sign in again.";

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// Previously entered email, echoed back after a failed attempt.
    pub email: String,
    /// Form action; the layout decides where login lives.
    pub login_path: String,
}

/// Build the auth router with the login page mounted at `login_path`.
pub fn router(login_path: &str) -> Router<AppState> {
    Router::new()
        .route(login_path, get(login_page).post(login))
        .route("/logout", post(logout))
}

/// Map a login error code to a user-facing message. Unknown codes show nothing.
fn error_message(code: Option<&str>) -> Option<String> {
    match code? {
        "expired" => Some(SESSION_EXPIRED_MESSAGE.to_string()),
        "invalid" => Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
        _ => None,
    }
}

/// Display the login page, or send signed-in users to their home section.
///
/// GET {login_path}
pub async fn login_page(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    Query(query): Query<LoginQuery>,
) -> Response {
    if let Some(session) = session {
        let guard = &state.layout().guard;
        let home = guard.home_for(session.role);
        if guard.check(session.role, home).is_allowed() {
            return Redirect::to(home).into_response();
        }
    }

    LoginTemplate {
        error: error_message(query.error.as_deref()),
        email: String::new(),
        login_path: state.layout().guard.login_path.clone(),
    }
    .into_response()
}

/// Handle login form submission.
///
/// POST {login_path}
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: HttpSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let password = SecretString::from(form.password);

    match state.authenticator().authenticate(&form.email, &password) {
        Ok(user) => {
            let guard = &state.layout().guard;
            let home = guard.home_for(user.role);

            if !guard.check(user.role, home).is_allowed() {
                tracing::warn!(role = ?user.role, "Login refused: no permitted home section");
                let page = LoginTemplate {
                    error: Some(NO_ACCESS_MESSAGE.to_string()),
                    email: form.email,
                    login_path: guard.login_path.clone(),
                };
                return Ok((StatusCode::FORBIDDEN, page).into_response());
            }

            session.set_session(&user).await?;
            set_sentry_user(user.email.as_str(), user.role.map(Role::as_str));

            tracing::info!(role = ?user.role, home = %home, "User signed in");

            Ok(Redirect::to(home).into_response())
        }
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            tracing::warn!("Login failed: invalid credentials");

            let page = LoginTemplate {
                error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
                email: form.email,
                login_path: state.layout().guard.login_path.clone(),
            };
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Sign out and return to the login page.
///
/// POST /logout
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, session: HttpSession) -> Redirect {
    if let Err(e) = session.clear_session().await {
        tracing::warn!(error = %e, "Failed to clear session on logout");
    }
    clear_sentry_user();

    Redirect::to(&state.layout().guard.login_path)
}
