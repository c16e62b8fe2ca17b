//! Session token store

use canvass_types::{Session, SessionToken};

/// Holds the current session for the page lifetime.
///
/// Mutated only by a successful token exchange; never persisted. A new
/// page load starts from an empty store.
#[derive(Default)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the session produced by a token exchange.
    pub fn install(&mut self, session: Session) -> &Session {
        self.session.insert(session)
    }

    /// The current session, if bootstrap has completed.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current session token, for authenticated writes.
    pub fn token(&self) -> Option<&SessionToken> {
        self.session.as_ref().map(|s| &s.token)
    }

    /// Drop the session at page teardown.
    pub fn clear(&mut self) {
        self.session = None;
    }
}
