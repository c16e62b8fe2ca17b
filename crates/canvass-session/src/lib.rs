//! Session bootstrap for Canvass
//!
//! Every page load runs the same flow once: check whether the third-party
//! identity widget already holds a valid session (silently, no user
//! interaction), pick an identity claim, and exchange it with the backend
//! for a session token. The [`SessionManager`] owns that flow and the two
//! page-lifetime singletons behind it (the session itself and the tracker
//! identity).
//!
//! # Flow
//!
//! ```text
//! Init ─▶ CheckingSilentSignIn ─▶ ResolvingIdentity ─▶ ExchangingToken ─▶ Ready
//!                                                              │
//!                                                              └─▶ Failed
//! ```
//!
//! The guest path never fails: a blocked analytics tracker degrades to a
//! synthetic client id, and an unavailable identity widget degrades to the
//! guest path. Only the token exchange itself is fatal to a page load.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod identity;
pub mod store;
pub mod tracker;

pub use bootstrap::{BootstrapError, BootstrapState, SessionManager};
pub use identity::{
    resolve_identity_claim, IdentityProvider, IdentityUnavailable, SilentSignIn,
    StaticIdentityProvider,
};
pub use store::SessionStore;
pub use tracker::{AnalyticsTracker, FixedTracker, TrackerCoordinator};
