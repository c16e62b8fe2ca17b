//! Identity provider seam and claim resolution

use async_trait::async_trait;
use thiserror::Error;

use canvass_types::{IdentityClaim, TrackerOrigin};

use crate::tracker::TrackerCoordinator;

/// Outcome of the silent sign-in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SilentSignIn {
    /// The browser already holds a valid third-party session.
    SignedIn { identity_token: String },
    SignedOut,
}

/// The third-party identity widget failed to initialize.
///
/// Never fatal: bootstrap logs it and continues on the guest path.
#[derive(Debug, Clone, Error)]
#[error("identity provider unavailable: {0}")]
pub struct IdentityUnavailable(pub String);

/// The third-party identity widget, reduced to the two things this core
/// consumes: the silent-check result and the token it carries.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn silent_sign_in(&self) -> Result<SilentSignIn, IdentityUnavailable>;
}

/// A provider with a fixed answer, for tests and headless harnesses.
pub struct StaticIdentityProvider {
    identity_token: Option<String>,
}

impl StaticIdentityProvider {
    /// Always reports signed-in with the given token.
    pub fn signed_in(identity_token: impl Into<String>) -> Self {
        Self {
            identity_token: Some(identity_token.into()),
        }
    }

    /// Always reports signed-out.
    pub fn signed_out() -> Self {
        Self {
            identity_token: None,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn silent_sign_in(&self) -> Result<SilentSignIn, IdentityUnavailable> {
        Ok(match &self.identity_token {
            Some(token) => SilentSignIn::SignedIn {
                identity_token: token.clone(),
            },
            None => SilentSignIn::SignedOut,
        })
    }
}

/// Select the identity claim for this bootstrap.
///
/// Pure selection logic over (third-party token, tracker capability); no
/// network access. The tracker is only consulted on the guest path, so a
/// signed-in page never creates a tracker identity it would not use.
pub fn resolve_identity_claim(
    identity_token: Option<String>,
    tracker: &mut TrackerCoordinator,
) -> IdentityClaim {
    match identity_token {
        Some(identity_token) => IdentityClaim::ThirdParty { identity_token },
        None => {
            let identity = tracker.get_or_create();
            match identity.origin {
                TrackerOrigin::Tracked => IdentityClaim::GuestTracked {
                    client_id: identity.client_id.clone(),
                },
                TrackerOrigin::Synthetic => IdentityClaim::GuestGenerated {
                    client_id: identity.client_id.clone(),
                },
            }
        }
    }
}
