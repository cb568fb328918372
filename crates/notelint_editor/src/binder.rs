//! Binding alerts to decorations.

use tracing::warn;

use notelint_core::Alert;
use notelint_text::{DocumentIndex, EditorSpan};

use crate::decoration::{Decoration, StyleClass};

/// Converts parsed alerts into decorations over the given snapshot.
///
/// Each alert's byte-based span is resolved to absolute UTF-16 offsets.
/// Alerts whose span no longer fits the document (it may have been
/// edited between check start and result arrival) are dropped, not
/// errored; one aggregate warning covers the whole run.
pub fn bind_alerts(alerts: &[Alert], index: &DocumentIndex) -> Vec<Decoration> {
    let mut dropped = 0usize;
    let decorations: Vec<Decoration> = alerts
        .iter()
        .filter_map(|alert| {
            let start = index.resolve_byte_position(&alert.start);
            let end = index.resolve_byte_position(&alert.end);
            match (start, end) {
                (Ok(start), Ok(end)) if start <= end => Some(Decoration::new(
                    alert.id,
                    EditorSpan::new(start, end),
                    StyleClass::from(alert.severity),
                )),
                _ => {
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    if dropped > 0 {
        warn!(
            dropped,
            total = alerts.len(),
            "alerts with unresolvable spans were dropped"
        );
    }
    decorations
}
