//! Session bootstrap state machine
//!
//! Composes the identity provider, tracker coordinator, and backend
//! exchange into a single once-per-page-load flow with an observable
//! state. The [`SessionManager`] is the only owner of the session and the
//! tracker identity; constructing one marks the page-load boundary and
//! dropping it is teardown.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use canvass_api::{decode_identity, ApiError, SurveyBackend};
use canvass_types::Session;

use crate::identity::{resolve_identity_claim, IdentityProvider, SilentSignIn};
use crate::store::SessionStore;
use crate::tracker::TrackerCoordinator;

/// Observable bootstrap state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Init,
    CheckingSilentSignIn,
    ResolvingIdentity,
    ExchangingToken,
    /// Terminal: the session is established for this page load.
    Ready,
    /// Terminal: the token exchange failed; no automatic retry.
    Failed,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapState::Init => write!(f, "init"),
            BootstrapState::CheckingSilentSignIn => write!(f, "checking-silent-sign-in"),
            BootstrapState::ResolvingIdentity => write!(f, "resolving-identity"),
            BootstrapState::ExchangingToken => write!(f, "exchanging-token"),
            BootstrapState::Ready => write!(f, "ready"),
            BootstrapState::Failed => write!(f, "failed"),
        }
    }
}

/// Fatal bootstrap failure; the caller routes the page to an error display.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The backend refused or failed the token exchange.
    #[error("session exchange failed: {0}")]
    TokenExchange(#[from] ApiError),
}

/// Owns the session bootstrap flow and its page-lifetime state.
pub struct SessionManager {
    backend: Arc<dyn SurveyBackend>,
    provider: Arc<dyn IdentityProvider>,
    tracker: TrackerCoordinator,
    store: SessionStore,
    state: BootstrapState,
}

impl SessionManager {
    pub fn new(
        backend: Arc<dyn SurveyBackend>,
        provider: Arc<dyn IdentityProvider>,
        tracker: TrackerCoordinator,
    ) -> Self {
        Self {
            backend,
            provider,
            tracker,
            store: SessionStore::new(),
            state: BootstrapState::Init,
        }
    }

    /// Current bootstrap state.
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// The established session, once `Ready`.
    pub fn session(&self) -> Option<&Session> {
        self.store.current()
    }

    /// Run the bootstrap flow to a terminal state.
    ///
    /// Intended to be called once per page load. Calling again while
    /// `Ready` returns the existing session without re-running the flow;
    /// the session is assumed valid until the next page load.
    pub async fn bootstrap(&mut self) -> Result<Session, BootstrapError> {
        if self.state == BootstrapState::Ready {
            if let Some(session) = self.store.current() {
                debug!("bootstrap already completed for this page load");
                return Ok(session.clone());
            }
        }

        self.state = BootstrapState::CheckingSilentSignIn;
        let sign_in = match self.provider.silent_sign_in().await {
            Ok(outcome) => outcome,
            Err(err) => {
                // Widget failure is not fatal; continue as a guest.
                warn!(error = %err, "identity provider unavailable, continuing as guest");
                SilentSignIn::SignedOut
            }
        };

        self.state = BootstrapState::ResolvingIdentity;
        let identity_token = match sign_in {
            SilentSignIn::SignedIn { identity_token } => Some(identity_token),
            SilentSignIn::SignedOut => None,
        };
        let claim = resolve_identity_claim(identity_token, &mut self.tracker);
        debug!(guest = claim.is_guest(), "identity claim resolved");

        self.state = BootstrapState::ExchangingToken;
        let envelope = match self.backend.exchange_session(&claim).await {
            Ok(envelope) => envelope,
            Err(err) => {
                self.state = BootstrapState::Failed;
                return Err(err.into());
            }
        };
        let identity = match decode_identity(&envelope.token) {
            Ok(identity) => identity,
            Err(err) => {
                self.state = BootstrapState::Failed;
                return Err(err.into());
            }
        };

        info!(user_id = %identity.user_id, guest = identity.guest, "session ready");
        let session = Session {
            token: envelope.token,
            identity,
        };
        self.store.install(session.clone());
        self.state = BootstrapState::Ready;
        Ok(session)
    }
}
