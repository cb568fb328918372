//! End-to-end marker lifecycle: byte-offset findings on multibyte text
//! become correctly-placed editor markers, survive unrelated edits, and
//! stay navigable in both directions.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use notelint_core::{AlertId, CheckError, Checker};
use notelint_editor::{EditDelta, Event, Frontend};
use notelint_text::EditorSpan;

struct CannedChecker(String);

#[async_trait]
impl Checker for CannedChecker {
    async fn execute(&self, _text: &str) -> Result<String, CheckError> {
        Ok(self.0.clone())
    }
}

// Document: "Héllo wörld\nsecond line"
// "wörld" starts at byte 7 (é is 2 bytes), 1-based byte columns [8, 13].
const DOC: &str = "Héllo wörld\nsecond line";
const REPORT: &str = r#"{"note.md": [{
    "Check": "Spelling.Unknown", "Severity": "error", "Line": 1,
    "Span": [8, 13], "Message": "Unknown word 'wörld'",
    "Action": { "Name": "replace", "Params": ["world"] }
}]}"#;

async fn checked_frontend() -> Arc<Frontend> {
    let frontend = Arc::new(Frontend::new(Arc::new(CannedChecker(REPORT.to_string()))));
    frontend.open_document(DOC);
    frontend.check_now().await;
    frontend
}

#[tokio::test]
async fn byte_span_lands_on_utf16_marker() {
    let frontend = checked_frontend().await;

    let decorations = frontend.store().decorations();
    assert_eq!(decorations.len(), 1);
    // "wörld" is UTF-16 columns [6, 11) on line 0
    assert_eq!(decorations[0].span, EditorSpan::new(6, 11));

    let alerts = frontend.alerts();
    assert_eq!(alerts[0].replacements, vec!["world".to_string()]);
}

#[tokio::test]
async fn marker_tracks_edits_before_it_and_dies_on_overlap() {
    let frontend = checked_frontend().await;

    // Typing at the start of the line shifts the marker right
    frontend.document_edited(&EditDelta::new(0, 0, ">> "), &format!(">> {DOC}"));
    assert_eq!(
        frontend.store().get(AlertId(0)).unwrap().span,
        EditorSpan::new(9, 14)
    );

    // Typing inside the marked word invalidates the marker
    frontend.document_edited(&EditDelta::new(10, 10, "x"), ">> Héllo wxörld\nsecond line");
    assert!(frontend.store().get(AlertId(0)).is_none());
}

#[tokio::test]
async fn navigation_follows_the_shifted_span() {
    let frontend = checked_frontend().await;
    let link = frontend.navigation();

    let events = Arc::new(parking_lot::Mutex::new(Vec::new()));
    {
        let events = events.clone();
        frontend.bus().subscribe(move |e| events.lock().push(e.clone()));
    }

    frontend.document_edited(&EditDelta::new(0, 0, ">> "), &format!(">> {DOC}"));

    // Result list -> editor uses the current, shifted span
    assert_eq!(
        link.result_activated(AlertId(0)),
        Some(EditorSpan::new(9, 14))
    );
    // Editor -> result list still resolves the same id
    assert!(link.decoration_activated(AlertId(0)));

    let events = events.lock();
    assert_eq!(events[0], Event::DecorationSelected(AlertId(0)));
    assert_eq!(events[1], Event::AlertSelected(AlertId(0)));
}

#[tokio::test]
async fn next_run_supersedes_the_marker_set() {
    let frontend = checked_frontend().await;
    assert_eq!(frontend.store().len(), 1);

    frontend.clear_alerts();
    assert!(frontend.store().is_empty());
    assert!(frontend.alerts().is_empty());

    // Re-checking installs a fresh set
    frontend.check_now().await;
    assert_eq!(frontend.store().len(), 1);
}
