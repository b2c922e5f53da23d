use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Local record of a logged-in user
///
/// Serializable so callers can persist it (disk, cookie, process memory) and
/// restore it later with [`Authenticator::set_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Username the session was opened for
    pub username: String,
    /// User id assigned by the service
    pub user_id: String,
    /// Auth token attached to user-scoped calls while the session is held
    pub auth_token: String,
}

impl Session {
    /// Creates a session record from its three fields
    pub fn new(
        username: impl Into<String>,
        user_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            user_id: user_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Checks that the record is well-formed: every field non-empty
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.is_empty() {
            return Err(AppError::InvalidArgument(
                "session username must not be empty".to_string(),
            ));
        }
        if self.user_id.is_empty() {
            return Err(AppError::InvalidArgument(
                "session user id must not be empty".to_string(),
            ));
        }
        if self.auth_token.is_empty() {
            return Err(AppError::InvalidArgument(
                "session auth token must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Session lifecycle operations of the Strutta API client
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs a user in, creating the client's session
    ///
    /// Fails with [`AppError::InvalidArgument`] on empty username or password
    /// and with [`AppError::SessionConflict`] while a session is already held;
    /// neither case issues a network call.
    ///
    /// # Returns
    /// * `Ok(Session)` - The newly created session
    /// * `Err(AppError)` - If the login call fails
    async fn login(&self, username: &str, password: &str) -> Result<Session, AppError>;

    /// Ends the current session
    ///
    /// The session is removed locally before `user/logout` is called, and the
    /// remote call is best-effort: its failure is logged and swallowed, never
    /// surfaced. Fails with [`AppError::NoActiveSession`] when no session is
    /// held.
    async fn logout(&self) -> Result<(), AppError>;

    /// Copy of the currently held session, if any
    async fn session(&self) -> Option<Session>;

    /// Replaces the held session with one restored by the caller
    ///
    /// Fails with [`AppError::InvalidArgument`] when the record is not
    /// well-formed.
    async fn set_session(&self, session: Session) -> Result<(), AppError>;

    /// Drops the held session without any remote call
    async fn clear_session(&self);
}
