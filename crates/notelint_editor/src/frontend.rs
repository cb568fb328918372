//! Wiring between triggers, the coordinator, and the decoration layer.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use notelint_core::{Alert, CheckCoordinator, CheckOutcome, Checker};
use notelint_text::DocumentIndex;

use crate::binder::bind_alerts;
use crate::decoration::EditDelta;
use crate::events::{Event, EventBus};
use crate::navigation::NavigationLink;
use crate::store::DecorationStore;

struct DocumentState {
    index: DocumentIndex,
    /// Bumped on every edit; debounced checks compare against it so a
    /// stale timer never re-checks an already-changed document.
    revision: u64,
}

/// The client frontend: owns the store, the bus, the coordinator, and
/// the last completed run's alerts.
///
/// All pieces are explicitly owned and injectable rather than
/// module-level singletons, so multiple documents can each carry their
/// own frontend and tests can run in isolation.
pub struct Frontend {
    coordinator: CheckCoordinator,
    store: Arc<DecorationStore>,
    bus: Arc<EventBus>,
    state: Mutex<DocumentState>,
    /// Last completed run's alerts, shared read-only with the
    /// result-list consumer.
    alerts: Mutex<Arc<[Alert]>>,
}

impl Frontend {
    /// Creates a frontend over the given linter transport.
    pub fn new(checker: Arc<dyn Checker>) -> Self {
        Self {
            coordinator: CheckCoordinator::new(checker),
            store: Arc::new(DecorationStore::new()),
            bus: Arc::new(EventBus::new()),
            state: Mutex::new(DocumentState {
                index: DocumentIndex::new(""),
                revision: 0,
            }),
            alerts: Mutex::new(Arc::from(Vec::new())),
        }
    }

    /// The live decoration set, for the rendering layer.
    pub fn store(&self) -> &Arc<DecorationStore> {
        &self.store
    }

    /// The event bus, for host-side subscribers.
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// A navigation link over this frontend's store and bus.
    pub fn navigation(&self) -> NavigationLink {
        NavigationLink::new(self.store.clone(), self.bus.clone())
    }

    /// The last completed run's alerts, shared read-only.
    pub fn alerts(&self) -> Arc<[Alert]> {
        self.alerts.lock().clone()
    }

    /// Current document revision.
    pub fn revision(&self) -> u64 {
        self.state.lock().revision
    }

    /// Replaces the document snapshot (note open or full reload) and
    /// drops markers and alerts from the previous document.
    pub fn open_document(&self, text: &str) {
        {
            let mut state = self.state.lock();
            state.index = DocumentIndex::new(text);
            state.revision += 1;
        }
        let had_alerts = !self.store.is_empty() || !self.alerts.lock().is_empty();
        self.store.clear_all();
        *self.alerts.lock() = Arc::from(Vec::new());
        if had_alerts {
            self.bus.emit(&Event::AlertsCleared);
        }
        debug!("document opened");
    }

    /// Applies one edit: remaps live decorations and reindexes the
    /// snapshot. Returns the new revision, for debounced re-checking.
    pub fn document_edited(&self, delta: &EditDelta, new_text: &str) -> u64 {
        self.store.apply_edit(delta);
        let mut state = self.state.lock();
        state.index = DocumentIndex::new(new_text);
        state.revision += 1;
        state.revision
    }

    /// Runs one check of the current snapshot through the full
    /// pipeline: coordinate → parse → bind → install → notify.
    ///
    /// A superseded run does nothing; a failed run emits `CheckFailed`
    /// and leaves the previous decorations untouched so prior feedback
    /// is not lost.
    pub async fn check_now(&self) -> CheckOutcome {
        self.bus.emit(&Event::CheckRequested);
        let text = self.state.lock().index.text().to_string();

        let outcome = self.coordinator.request_check(&text).await;
        match &outcome {
            CheckOutcome::Completed(alerts) => {
                // Bind against the current snapshot: if the document
                // changed while the check ran, spans it outgrew are
                // dropped by the binder.
                let decorations = {
                    let state = self.state.lock();
                    bind_alerts(alerts, &state.index)
                };
                self.store.install(decorations);
                *self.alerts.lock() = Arc::from(alerts.as_slice());
                self.bus.emit(&Event::CheckCompleted {
                    alert_count: alerts.len(),
                });
            }
            CheckOutcome::Failed(err) => {
                self.bus.emit(&Event::CheckFailed(err.to_string()));
            }
            CheckOutcome::Superseded => {}
        }
        outcome
    }

    /// Clears all alerts and markers.
    pub fn clear_alerts(&self) {
        self.store.clear_all();
        *self.alerts.lock() = Arc::from(Vec::new());
        self.bus.emit(&Event::AlertsCleared);
    }
}
