//! End-to-end single-flight behavior: the newest request always wins,
//! even when an older run resolves later.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use std::sync::Mutex;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use notelint_core::{CheckError, CheckOutcome, Checker};
use notelint_editor::Frontend;

/// Replays scripted (delay, report) pairs, one per execution.
struct ScriptedChecker {
    script: Mutex<VecDeque<(Duration, String)>>,
}

impl ScriptedChecker {
    fn new(script: Vec<(Duration, &str)>) -> Self {
        Self {
            script: Mutex::new(
                script
                    .into_iter()
                    .map(|(d, r)| (d, r.to_string()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl Checker for ScriptedChecker {
    async fn execute(&self, _text: &str) -> Result<String, CheckError> {
        let (delay, report) = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("checker invoked more times than scripted");
        tokio::time::sleep(delay).await;
        Ok(report)
    }
}

fn report(rule: &str) -> String {
    format!(
        r#"{{"note.md": [{{
            "Check": "{rule}", "Severity": "warning", "Line": 1,
            "Span": [1, 5], "Message": "finding from {rule}"
        }}]}}"#
    )
}

#[tokio::test]
async fn slow_early_run_never_overwrites_fast_later_run() {
    let checker = Arc::new(ScriptedChecker::new(vec![
        (Duration::from_millis(80), &report("Rule.First")),
        (Duration::from_millis(5), &report("Rule.Second")),
    ]));
    let frontend = Arc::new(Frontend::new(checker));
    frontend.open_document("some words here");

    let first = {
        let frontend = frontend.clone();
        tokio::spawn(async move { frontend.check_now().await })
    };
    // Let the first run reach its suspension point before superseding it
    tokio::time::sleep(Duration::from_millis(20)).await;

    let second = frontend.check_now().await;
    assert!(matches!(second, CheckOutcome::Completed(_)));

    let first = first.await.unwrap();
    assert!(matches!(first, CheckOutcome::Superseded));

    // The store and the shared alert set reflect only the second run
    let alerts = frontend.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].rule_id, "Rule.Second");
    assert_eq!(frontend.store().len(), 1);
}

#[tokio::test]
async fn failed_run_keeps_previous_results_visible() {
    struct OnceThenFail {
        first: Mutex<Option<String>>,
    }

    #[async_trait]
    impl Checker for OnceThenFail {
        async fn execute(&self, _text: &str) -> Result<String, CheckError> {
            match self.first.lock().unwrap().take() {
                Some(report) => Ok(report),
                None => Err(CheckError::transport("linter exited with status 2")),
            }
        }
    }

    let frontend = Frontend::new(Arc::new(OnceThenFail {
        first: Mutex::new(Some(report("Rule.Kept"))),
    }));
    frontend.open_document("some words here");

    assert!(matches!(
        frontend.check_now().await,
        CheckOutcome::Completed(_)
    ));
    assert_eq!(frontend.store().len(), 1);

    // The second run fails; the user keeps the first run's feedback
    assert!(matches!(frontend.check_now().await, CheckOutcome::Failed(_)));
    assert_eq!(frontend.store().len(), 1);
    assert_eq!(frontend.alerts()[0].rule_id, "Rule.Kept");
}
