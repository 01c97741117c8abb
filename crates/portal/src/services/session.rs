//! Session Provider over the cookie session store.
//!
//! Handlers and middleware never read the session store directly: they go
//! through [`SessionProvider`], whose lifecycle is explicit. `set_session`
//! runs once at login, `clear_session` at logout, and `current_session` on
//! every navigation event in between.

use recruitdesk_core::Session;
use tower_sessions::Session as HttpSession;

use crate::models::session_keys;

/// Source of the signed-in user's [`Session`].
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// Store error type.
    type Error: std::error::Error;

    /// The current session, if someone is signed in.
    async fn current_session(&self) -> Result<Option<Session>, Self::Error>;

    /// Start a session. Rotates the session id to prevent fixation.
    async fn set_session(&self, session: &Session) -> Result<(), Self::Error>;

    /// End the session.
    async fn clear_session(&self) -> Result<(), Self::Error>;
}

impl SessionProvider for HttpSession {
    type Error = tower_sessions::session::Error;

    async fn current_session(&self) -> Result<Option<Session>, Self::Error> {
        self.get::<Session>(session_keys::CURRENT_SESSION).await
    }

    async fn set_session(&self, session: &Session) -> Result<(), Self::Error> {
        self.cycle_id().await?;
        self.insert(session_keys::CURRENT_SESSION, session).await
    }

    async fn clear_session(&self) -> Result<(), Self::Error> {
        self.remove::<Session>(session_keys::CURRENT_SESSION).await?;
        Ok(())
    }
}

/// Read the current session, treating store errors as "signed out".
///
/// A corrupt or unreadable session must never grant access, so any error is
/// logged and mapped to `None`.
pub async fn current_or_none<P: SessionProvider>(provider: &P) -> Option<Session> {
    match provider.current_session().await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session; treating as signed out");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use recruitdesk_core::{Email, Role};
    use tower_sessions::MemoryStore;

    use super::*;

    fn http_session() -> HttpSession {
        HttpSession::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn session() -> Session {
        Session {
            role: Some(Role::Sales),
            display_name: "Ravi Sales".to_string(),
            email: Email::parse("ravi@recruitdesk.io").unwrap(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let store = http_session();
        assert_eq!(store.current_session().await.unwrap(), None);

        store.set_session(&session()).await.unwrap();
        assert_eq!(store.current_session().await.unwrap(), Some(session()));

        store.clear_session().await.unwrap();
        assert_eq!(current_or_none(&store).await, None);
    }
}
