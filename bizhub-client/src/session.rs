//! Session context
//!
//! The session is an explicit, injectable object handed to the client at
//! construction time. The client reads the token from it before every
//! request and clears it when the server rejects the credentials; it never
//! reaches for ambient global state.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use shared::models::Business;

use crate::error::ClientResult;

/// An authenticated session: the bearer token plus the business snapshot
/// returned at login. Both halves are stored and cleared together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub business: Business,
}

/// Events emitted by the client for the hosting application.
///
/// The client never navigates; the host subscribes and decides how to
/// react (typically by forcing the login route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
    /// The server rejected the stored credentials (HTTP 401). The session
    /// store has already been cleared when this fires.
    SessionExpired,
}

/// Storage for the current session.
///
/// `save` and `clear` operate on the whole session: a token is stored if
/// and only if its business profile is stored alongside it.
pub trait SessionStore: Send + Sync {
    /// Load the current session, if one is stored.
    fn load(&self) -> Option<Session>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session) -> ClientResult<()>;

    /// Remove the stored session. Clearing an empty store is a no-op.
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory session store for hosts without persistence needs and for tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}
