//! Session guard
//!
//! `Unauthenticated -> Authenticating -> {Authenticated, Unauthenticated}`
//!
//! A stored session is trusted on read: [`SessionGuard::restore`] does not
//! re-check credentials and sessions never expire.

use crate::storage::{KeyValueStore, StorageError, USER_KEY};
use crate::utils::{AppError, AppResult};
use shared::models::SessionUser;
use std::sync::Arc;

/// Shown for any failed login; does not say which field was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// The single admin credential pair
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl AdminCredentials {
    fn matches(&self, username: &str, password: &str) -> bool {
        // no short-circuit
        let user_ok = self.username == username;
        let pass_ok = self.password == password;
        user_ok & pass_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated(SessionUser),
}

pub struct SessionGuard {
    storage: Arc<dyn KeyValueStore>,
    credentials: AdminCredentials,
    state: SessionState,
    last_error: Option<&'static str>,
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl SessionGuard {
    pub fn new(storage: Arc<dyn KeyValueStore>, credentials: AdminCredentials) -> Self {
        Self {
            storage,
            credentials,
            state: SessionState::Unauthenticated,
            last_error: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Message for the last failed login, cleared by the next attempt
    pub fn login_error(&self) -> Option<&'static str> {
        self.last_error
    }

    /// The signed-in user, or `NotAuthenticated`
    pub fn require_auth(&self) -> AppResult<&SessionUser> {
        self.current_user().ok_or_else(AppError::not_authenticated)
    }

    /// Check the credentials. A mismatch is `Ok(false)` and leaves any
    /// existing session in place; only a storage failure is an error, and it
    /// leaves the guard unauthenticated.
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<bool> {
        let previous = std::mem::replace(&mut self.state, SessionState::Authenticating);
        self.last_error = None;

        if !self.credentials.matches(username, password) {
            // the stored `user` record still matches `previous`
            self.state = match previous {
                SessionState::Authenticated(user) => SessionState::Authenticated(user),
                _ => SessionState::Unauthenticated,
            };
            self.last_error = Some(INVALID_CREDENTIALS_MESSAGE);
            tracing::warn!(username = %username, "Login rejected: invalid credentials");
            return Ok(false);
        }

        let user = SessionUser::administrator(username);
        if let Err(e) = self.storage.put_json(USER_KEY, &user) {
            self.state = SessionState::Unauthenticated;
            tracing::error!(error = %e, "Failed to persist session");
            return Err(e.into());
        }

        tracing::info!(user_id = %user.id, username = %user.username, "Login succeeded");
        self.state = SessionState::Authenticated(user);
        Ok(true)
    }

    /// Clear the session in memory and in storage
    pub fn logout(&mut self) -> AppResult<()> {
        self.storage.remove(USER_KEY)?;
        if let SessionState::Authenticated(user) = &self.state {
            tracing::info!(username = %user.username, "Logged out");
        }
        self.state = SessionState::Unauthenticated;
        self.last_error = None;
        Ok(())
    }

    /// Adopt a stored session without re-validating it.
    ///
    /// An undecodable record is ignored. Returns whether a session was found.
    pub fn restore(&mut self) -> AppResult<bool> {
        match self.storage.get_json::<SessionUser>(USER_KEY) {
            Ok(Some(user)) => {
                tracing::info!(username = %user.username, "Session restored");
                self.state = SessionState::Authenticated(user);
                Ok(true)
            }
            Ok(None) => {
                self.state = SessionState::Unauthenticated;
                Ok(false)
            }
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(error = %e, "Ignoring unreadable session record");
                self.state = SessionState::Unauthenticated;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
