//! Session, identity claims, and tracker identity
//!
//! A [`Session`] is the backend-issued token plus its decoded identity
//! payload. It lives for one page load and is re-derived on the next; there
//! is no refresh or expiry handling in this layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{ClientId, UserId};

/// Opaque backend-issued session token.
///
/// Treated as a bearer credential; deliberately has no `Display` impl so it
/// does not end up in log output by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity claim set decoded from the session token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityPayload {
    pub user_id: UserId,
    /// True when the session was issued against a guest claim.
    #[serde(default)]
    pub guest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The current session: token plus decoded identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub identity: IdentityPayload,
}

/// The identity presented to the backend when exchanging for a session.
///
/// Exactly one variant is chosen per bootstrap, depending on the silent
/// sign-in outcome and tracker availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "claim")]
pub enum IdentityClaim {
    /// Guest with a locally synthesized client id (tracker blocked).
    GuestGenerated { client_id: ClientId },
    /// Guest with the analytics tracker's client id.
    GuestTracked { client_id: ClientId },
    /// Signed in through the third-party identity widget.
    ThirdParty { identity_token: String },
}

impl IdentityClaim {
    /// The guest client id, if this is a guest claim.
    pub fn client_id(&self) -> Option<&ClientId> {
        match self {
            IdentityClaim::GuestGenerated { client_id } => Some(client_id),
            IdentityClaim::GuestTracked { client_id } => Some(client_id),
            IdentityClaim::ThirdParty { .. } => None,
        }
    }

    pub fn is_guest(&self) -> bool {
        !matches!(self, IdentityClaim::ThirdParty { .. })
    }
}

/// Where a tracker identity's client id came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerOrigin {
    /// Produced by the analytics tracker.
    Tracked,
    /// Synthesized locally because the tracker was unavailable.
    Synthetic,
}

impl fmt::Display for TrackerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerOrigin::Tracked => write!(f, "tracked"),
            TrackerOrigin::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// The page-lifetime analytics identity.
///
/// Created at most once per page load and reused across sign-in/out
/// transitions for the remainder of the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerIdentity {
    pub client_id: ClientId,
    pub origin: TrackerOrigin,
}
