//! Analytics tracker coordination
//!
//! Guest sessions are deduplicated by a stable client id. The analytics
//! tracker supplies one when its script loaded; content blockers routinely
//! strip it, so absence of the capability is an expected branch, handled
//! silently with a synthesized id.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use canvass_types::{ClientId, TrackerIdentity, TrackerOrigin};

/// Client-id capability of the analytics integration.
///
/// Implementations are consulted at most once per page lifetime.
pub trait AnalyticsTracker: Send + Sync {
    fn client_id(&self) -> ClientId;
}

/// A tracker with a fixed client id, for tests and offline harnesses.
pub struct FixedTracker {
    client_id: ClientId,
}

impl FixedTracker {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: ClientId::new(client_id),
        }
    }
}

impl AnalyticsTracker for FixedTracker {
    fn client_id(&self) -> ClientId {
        self.client_id.clone()
    }
}

/// Creates and caches the page-lifetime tracker identity.
///
/// The identity is created lazily on first need, never eagerly at page
/// load, and is reused across sign-in/out cycles for the rest of the page
/// lifetime.
pub struct TrackerCoordinator {
    tracker: Option<Arc<dyn AnalyticsTracker>>,
    identity: Option<TrackerIdentity>,
}

impl TrackerCoordinator {
    /// Coordinator over an available tracker capability.
    pub fn new(tracker: Arc<dyn AnalyticsTracker>) -> Self {
        Self {
            tracker: Some(tracker),
            identity: None,
        }
    }

    /// Coordinator with no tracker capability (blocked analytics script).
    pub fn detached() -> Self {
        Self {
            tracker: None,
            identity: None,
        }
    }

    /// Get the page-lifetime tracker identity, creating it on first call.
    ///
    /// Subsequent calls return the cached identity unchanged, so the
    /// client id is stable for the whole page lifetime.
    pub fn get_or_create(&mut self) -> &TrackerIdentity {
        let tracker = &self.tracker;
        self.identity.get_or_insert_with(|| match tracker {
            Some(tracker) => TrackerIdentity {
                client_id: tracker.client_id(),
                origin: TrackerOrigin::Tracked,
            },
            None => {
                let client_id = synthesize_client_id();
                debug!(%client_id, "analytics tracker unavailable, synthesized client id");
                TrackerIdentity {
                    client_id,
                    origin: TrackerOrigin::Synthetic,
                }
            }
        })
    }

    /// The cached identity, if one has been created.
    pub fn identity(&self) -> Option<&TrackerIdentity> {
        self.identity.as_ref()
    }
}

/// Millisecond timestamp plus a random suffix; unique enough to
/// deduplicate guest sessions.
fn synthesize_client_id() -> ClientId {
    let suffix: u32 = rand::random();
    ClientId::new(format!("{}-{:08x}", Utc::now().timestamp_millis(), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingTracker {
        calls: AtomicU32,
    }

    impl AnalyticsTracker for CountingTracker {
        fn client_id(&self) -> ClientId {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ClientId::new("abc123")
        }
    }

    #[test]
    fn test_identity_created_at_most_once() {
        let tracker = Arc::new(CountingTracker {
            calls: AtomicU32::new(0),
        });
        let mut coordinator = TrackerCoordinator::new(tracker.clone());

        let first = coordinator.get_or_create().clone();
        let second = coordinator.get_or_create().clone();

        assert_eq!(first, second);
        assert_eq!(first.origin, TrackerOrigin::Tracked);
        assert_eq!(tracker.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_detached_coordinator_synthesizes_stable_id() {
        let mut coordinator = TrackerCoordinator::detached();

        let first = coordinator.get_or_create().clone();
        let second = coordinator.get_or_create().clone();

        assert_eq!(first.origin, TrackerOrigin::Synthetic);
        assert_eq!(first.client_id, second.client_id);
    }

    #[test]
    fn test_synthetic_ids_differ_across_pages() {
        let a = TrackerCoordinator::detached().get_or_create().clone();
        let b = TrackerCoordinator::detached().get_or_create().clone();
        assert_ne!(a.client_id, b.client_id);
    }

    #[test]
    fn test_no_eager_creation() {
        let coordinator = TrackerCoordinator::detached();
        assert!(coordinator.identity().is_none());
    }
}
