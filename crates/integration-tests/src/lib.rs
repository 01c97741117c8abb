//! Integration test harness for the RecruitDesk portal.
//!
//! Each test spawns the full portal router on an ephemeral port and talks to
//! it over HTTP with a cookie-keeping client, so sessions, the route guard
//! and every middleware layer run exactly as in production.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p recruitdesk-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use recruitdesk_core::{Email, PortalLayout, Role};
use recruitdesk_portal::config::{PortalConfig, SentryConfig};
use recruitdesk_portal::models::{DirectoryUser, UserDirectory};
use recruitdesk_portal::services::{DirectoryAuthenticator, hash_password};
use recruitdesk_portal::state::AppState;
use reqwest::{Client, Response, redirect::Policy};
use secrecy::SecretString;
use tokio::task::JoinHandle;
use tower_sessions::MemoryStore;

/// Password shared by every test account.
pub const PASSWORD: &str = "placement-season-2024";

/// Test accounts: one per role plus one without a role.
pub const ADMIN_EMAIL: &str = "admin@recruitdesk.io";
pub const COLLEGE_EMAIL: &str = "tpo@campus.edu";
pub const CANDIDATE_EMAIL: &str = "asha@mail.in";
pub const EMPLOYER_EMAIL: &str = "hr@acme.io";
pub const SALES_EMAIL: &str = "ravi@recruitdesk.io";
pub const NO_ROLE_EMAIL: &str = "pending@recruitdesk.io";

/// Argon2 hashing is slow in debug builds; hash the shared password once.
fn password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        hash_password(&SecretString::from(PASSWORD.to_string()))
            .unwrap_or_else(|e| panic!("failed to hash test password: {e}"))
    })
}

fn user(email: &str, display_name: &str, role: Option<Role>) -> DirectoryUser {
    DirectoryUser {
        email: Email::parse(email).unwrap_or_else(|e| panic!("bad test email {email}: {e}")),
        display_name: display_name.to_string(),
        role,
        avatar: None,
        password_hash: password_hash().to_string(),
    }
}

/// The user directory every test portal signs in against.
#[must_use]
pub fn test_directory() -> UserDirectory {
    UserDirectory {
        users: vec![
            user(ADMIN_EMAIL, "Platform Admin", Some(Role::Admin)),
            user(COLLEGE_EMAIL, "Campus TPO", Some(Role::College)),
            user(CANDIDATE_EMAIL, "Asha Rao", Some(Role::Candidate)),
            user(EMPLOYER_EMAIL, "Acme Hiring", Some(Role::Employer)),
            user(SALES_EMAIL, "Ravi Kumar", Some(Role::Sales)),
            user(NO_ROLE_EMAIL, "Pending Account", None),
        ],
    }
}

fn test_config(addr: SocketAddr) -> PortalConfig {
    PortalConfig {
        host: addr.ip(),
        port: addr.port(),
        base_url: format!("http://{addr}"),
        users_file: PathBuf::from("users.yaml"),
        layout_file: None,
        guard_policy: None,
        log_json: false,
        sentry: SentryConfig::default(),
    }
}

/// A portal server running on an ephemeral local port.
pub struct TestPortal {
    pub base_url: String,
    /// Where the layout mounts the login page.
    pub login_path: String,
    server: JoinHandle<()>,
}

impl TestPortal {
    /// Spawn the portal with the built-in layout.
    pub async fn spawn() -> Self {
        Self::spawn_with_layout(PortalLayout::default()).await
    }

    /// Spawn the portal with a custom layout.
    pub async fn spawn_with_layout(layout: PortalLayout) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("failed to bind test listener: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("failed to read test listener address: {e}"));

        let login_path = layout.guard.login_path.clone();
        let state = AppState::new(
            test_config(addr),
            layout,
            Arc::new(DirectoryAuthenticator::new(test_directory())),
        );
        let app = recruitdesk_portal::app(state, MemoryStore::default());

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            login_path,
            server,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A client that keeps cookies and does not follow redirects.
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap_or_else(|e| panic!("failed to create HTTP client: {e}"))
    }

    /// POST the login form to the layout's login path.
    pub async fn login(&self, client: &Client, email: &str, password: &str) -> Response {
        client
            .post(self.url(&self.login_path))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .unwrap_or_else(|e| panic!("login request failed: {e}"))
    }

    /// A client signed in as `email` with the shared password.
    pub async fn signed_in(&self, email: &str) -> Client {
        let client = Self::client();
        let response = self.login(&client, email, PASSWORD).await;
        assert!(
            response.status().is_redirection(),
            "login as {email} failed with {}",
            response.status()
        );
        client
    }

    /// GET `path` with `client`.
    pub async fn get(&self, client: &Client, path: &str) -> Response {
        client
            .get(self.url(path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {path} failed: {e}"))
    }
}

impl Drop for TestPortal {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
}
