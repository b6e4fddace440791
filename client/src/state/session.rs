//! Session store: the auth token and user profile for the current page.
//!
//! DESIGN
//! ======
//! One `SessionStore` is created by `App` and provided as
//! `RwSignal<SessionStore>`. Nothing reads auth state from anywhere else.
//! The store starts unloaded because `sessionStorage` only exists in the
//! browser; `App` restores it once hydrated, and route gates wait for that
//! before deciding to redirect.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use catalog::{TokenResponse, UserProfile};
use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::util::storage::{self, StorageError};

/// `sessionStorage` key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "stockroom_session";

/// An authenticated session as persisted between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl From<TokenResponse> for Session {
    fn from(resp: TokenResponse) -> Self {
        Self { token: resp.access_token, user: resp.user }
    }
}

/// Current session plus the bookkeeping the route gate needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Option<Session>,
    loaded: bool,
    expired: bool,
}

impl SessionStore {
    /// Read the persisted session, marking the store as loaded.
    pub fn restore() -> Self {
        Self { session: Self::load(), loaded: true, expired: false }
    }

    /// Build a loaded store around an explicit session.
    pub fn with_session(session: Option<Session>) -> Self {
        Self { session, loaded: true, expired: false }
    }

    /// The persisted session, if any. Blank tokens count as absent.
    pub fn load() -> Option<Session> {
        storage::load_json::<Session>(SESSION_STORAGE_KEY).filter(|s| !s.token.is_empty())
    }

    /// Persist `session` and make it visible to subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the store is left unchanged.
    pub fn save(&mut self, session: Session) -> Result<(), StorageError> {
        let persisted = storage::save_json(SESSION_STORAGE_KEY, &session);
        self.commit(session, persisted)
    }

    /// Adopt `session` only if persisting it succeeded.
    fn commit(&mut self, session: Session, persisted: Result<(), StorageError>) -> Result<(), StorageError> {
        persisted?;
        self.session = Some(session);
        self.loaded = true;
        self.expired = false;
        Ok(())
    }

    /// Drop the token and profile (logout).
    pub fn clear(&mut self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.session = None;
        self.loaded = true;
    }

    /// Clear the session because the server rejected its token.
    pub fn expire(&mut self) {
        self.clear();
        self.expired = true;
    }

    /// Expire the session when `err` is a token rejection.
    ///
    /// Returns `true` if the session was expired.
    pub fn note_failure(&mut self, err: &ApiError) -> bool {
        if err.is_unauthorized() && self.has_session() {
            self.expire();
            return true;
        }
        false
    }

    /// True iff a token is present.
    pub fn has_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.token.is_empty())
    }

    /// True once the persisted session has been read.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when the last session ended because the server rejected it.
    pub fn was_expired(&self) -> bool {
        self.expired
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// `Authorization` header for API calls. The token is empty when no
    /// session exists; callers gate on [`Self::has_session`] first.
    pub fn auth_header(&self) -> (&'static str, String) {
        ("Authorization", catalog::bearer(self.token().unwrap_or_default()))
    }
}
