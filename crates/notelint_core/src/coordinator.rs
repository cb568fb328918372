//! Single-flight scheduling of check runs.
//!
//! Checks are triggered by several independent stimuli (manual command,
//! note open, debounced auto-check) and must never run concurrently. A
//! newer request supersedes an in-flight older one; results arriving
//! for a superseded request are discarded unconditionally. Triggers are
//! never blocked or queued - the newest request always wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::alert::Alert;
use crate::checker::Checker;
use crate::error::CheckError;
use crate::findings::parse_findings;
use crate::run::{CheckRun, RequestId, RunStatus};

/// Outcome of one check request, as seen by its trigger.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The run completed and its alerts are current.
    Completed(Vec<Alert>),
    /// A newer request took over; this result was discarded.
    Superseded,
    /// The transport or report parsing failed. Not retried.
    Failed(CheckError),
}

/// Coordinates linter executions so at most one run is current.
///
/// Supersession is logical: an in-flight external call is not aborted,
/// its eventual result is simply discarded when it no longer carries
/// the current request id. Correctness never depends on transport
/// abort. Results are therefore applied last-request-wins, never
/// last-completed-wins.
pub struct CheckCoordinator {
    checker: Arc<dyn Checker>,
    next_id: AtomicU64,
    /// The request id whose result is still welcome.
    current: AtomicU64,
    last_run: Mutex<Option<CheckRun>>,
}

impl CheckCoordinator {
    /// Creates a coordinator around the given transport.
    pub fn new(checker: Arc<dyn Checker>) -> Self {
        Self {
            checker,
            next_id: AtomicU64::new(0),
            current: AtomicU64::new(0),
            last_run: Mutex::new(None),
        }
    }

    /// Requests a check of the given snapshot.
    ///
    /// If a run is in flight it is superseded immediately; its eventual
    /// result will be discarded even if it would have succeeded.
    /// Failures surface once and are not retried, so a missing linter
    /// binary cannot cause runaway repeated executions.
    pub async fn request_check(&self, text: &str) -> CheckOutcome {
        let id = RequestId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.current.store(id.0, Ordering::SeqCst);

        let mut run = CheckRun::new(id);
        run.status = RunStatus::Running;
        *self.last_run.lock() = Some(run);
        debug!(request = id.0, "check run started");

        let result = self.checker.execute(text).await;

        if self.current.load(Ordering::SeqCst) != id.0 {
            // A newer request owns the token; whatever we got is stale.
            debug!(request = id.0, "check run superseded, discarding result");
            self.finish(id, RunStatus::Superseded);
            return CheckOutcome::Superseded;
        }

        match result.and_then(|raw| parse_findings(&raw)) {
            Ok(alerts) => {
                self.finish(id, RunStatus::Completed);
                debug!(request = id.0, alerts = alerts.len(), "check run completed");
                CheckOutcome::Completed(alerts)
            }
            Err(err) => {
                self.finish(id, RunStatus::Failed);
                warn!(request = id.0, error = %err, "check run failed");
                CheckOutcome::Failed(err)
            }
        }
    }

    /// The most recently started run and its status, for status display.
    pub fn current_run(&self) -> Option<CheckRun> {
        *self.last_run.lock()
    }

    /// Records a final status without clobbering a newer run's record.
    fn finish(&self, id: RequestId, status: RunStatus) {
        let mut guard = self.last_run.lock();
        if let Some(run) = guard.as_mut()
            && run.id == id
        {
            run.status = status;
        }
    }
}
