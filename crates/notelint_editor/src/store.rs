//! The live decoration set and its survival under edits.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use notelint_core::AlertId;
use notelint_text::EditorSpan;

use crate::decoration::{Decoration, EditDelta};

/// Owns the live set of range markers, keyed by alert id.
///
/// This is the single source of truth for "what is currently
/// underlined" and the only mutable shared state in the client. Every
/// mutation runs atomically behind one lock, in event order; consumers
/// never observe a partially-updated set.
#[derive(Debug, Default)]
pub struct DecorationStore {
    inner: Mutex<HashMap<AlertId, Decoration>>,
}

impl DecorationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the previous full set with `decorations` atomically.
    pub fn install(&self, decorations: Vec<Decoration>) {
        let mut inner = self.inner.lock();
        inner.clear();
        for decoration in decorations {
            inner.insert(decoration.alert_id, decoration);
        }
        debug!(count = inner.len(), "decoration set installed");
    }

    /// Removes every decoration. Idempotent.
    pub fn clear_all(&self) {
        self.inner.lock().clear();
    }

    /// Removes decorations whose span overlaps `span`.
    pub fn clear_in_range(&self, span: EditorSpan) {
        self.inner.lock().retain(|_, d| !d.span.overlaps(&span));
    }

    /// Removes decorations matching `predicate`.
    pub fn clear_matching(&self, predicate: impl Fn(&Decoration) -> bool) {
        self.inner.lock().retain(|_, d| !predicate(d));
    }

    /// Remaps every decoration under one document mutation.
    ///
    /// Spans entirely before the edit are unchanged; spans entirely
    /// after shift by the net length delta; spans overlapping the
    /// edited range are invalidated and removed, because a marker
    /// cannot keep describing text that was partially rewritten.
    /// Returns the number of invalidated decorations.
    pub fn apply_edit(&self, delta: &EditDelta) -> usize {
        if delta.is_noop() {
            return 0;
        }

        let removed = delta.removed_span();
        let net = delta.net_delta();
        let mut inner = self.inner.lock();
        let before = inner.len();

        inner.retain(|_, d| !d.span.overlaps(&removed));
        for decoration in inner.values_mut() {
            if decoration.span.start >= delta.to {
                decoration.span = EditorSpan::new(
                    (i64::from(decoration.span.start) + net) as u32,
                    (i64::from(decoration.span.end) + net) as u32,
                );
            }
        }

        let invalidated = before - inner.len();
        if invalidated > 0 {
            debug!(invalidated, "decorations invalidated by edit");
        }
        invalidated
    }

    /// Current span and style for the given alert, if still live.
    pub fn get(&self, alert_id: AlertId) -> Option<Decoration> {
        self.inner.lock().get(&alert_id).cloned()
    }

    /// Snapshot of the full set, ordered by span start for rendering.
    pub fn decorations(&self) -> Vec<Decoration> {
        let mut all: Vec<Decoration> = self.inner.lock().values().cloned().collect();
        all.sort_by_key(|d| (d.span.start, d.span.end, d.alert_id));
        all
    }

    /// Number of live decorations.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True when no decorations are live.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
