//! Typed event bus for cross-boundary wiring.
//!
//! Replaces an ad-hoc callback channel with an explicit observer
//! registry. Delivery is synchronous and in emission order; within one
//! emission, subscribers run in registration order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use notelint_core::AlertId;

/// Events crossing the boundary between this client and its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A check was triggered.
    CheckRequested,
    /// A check completed and its alerts are current.
    CheckCompleted { alert_count: usize },
    /// A check failed; prior decorations are left in place.
    CheckFailed(String),
    /// A result-list entry should scroll into view and highlight.
    AlertSelected(AlertId),
    /// The editor should scroll to a decoration and highlight it.
    DecorationSelected(AlertId),
    /// All alerts were cleared.
    AlertsCleared,
}

/// Handle identifying one subscriber; pass back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Synchronous, in-order observer registry.
#[derive(Default)]
pub struct EventBus {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(u64, Handler)>>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler; it receives every subsequent emission.
    pub fn subscribe(&self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.lock().push((id, Arc::new(handler)));
        Subscription(id)
    }

    /// Removes a handler. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers.lock().retain(|(id, _)| *id != subscription.0);
    }

    /// Delivers `event` to every subscriber, synchronously.
    ///
    /// The registry is snapshotted before delivery, so a handler may
    /// subscribe or emit without deadlocking; such effects apply from
    /// the next emission on.
    pub fn emit(&self, event: &Event) {
        let handlers: Vec<Handler> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}
