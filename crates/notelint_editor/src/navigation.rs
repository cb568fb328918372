//! Bidirectional navigation between markers and result-list entries.

use std::sync::Arc;

use tracing::debug;

use notelint_core::AlertId;
use notelint_text::EditorSpan;

use crate::events::{Event, EventBus};
use crate::store::DecorationStore;

/// Cross-references decorations and result-list entries by alert id.
///
/// Both directions use the decoration's current, edit-adjusted span,
/// never the original alert span, so navigation stays accurate after
/// intervening edits elsewhere in the document.
pub struct NavigationLink {
    store: Arc<DecorationStore>,
    bus: Arc<EventBus>,
}

impl NavigationLink {
    /// Creates a link over the given store and bus.
    pub fn new(store: Arc<DecorationStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    /// The user activated a marker in the editor: scroll the result
    /// list to the matching entry. Returns false when the decoration is
    /// no longer live (it was invalidated or superseded).
    pub fn decoration_activated(&self, alert_id: AlertId) -> bool {
        if self.store.get(alert_id).is_none() {
            debug!(alert = alert_id.0, "activated decoration is no longer live");
            return false;
        }
        self.bus.emit(&Event::AlertSelected(alert_id));
        true
    }

    /// The user activated a result-list entry: scroll the editor to the
    /// marker's current span and highlight it transiently. Returns the
    /// span to scroll to, or `None` when the decoration is gone.
    pub fn result_activated(&self, alert_id: AlertId) -> Option<EditorSpan> {
        let decoration = self.store.get(alert_id)?;
        self.bus.emit(&Event::DecorationSelected(alert_id));
        Some(decoration.span)
    }
}
