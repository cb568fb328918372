//! Debounced auto-check trigger.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::frontend::Frontend;

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Spawns a debounced check for the given document revision.
///
/// The task waits out the debounce period, then checks only if the
/// revision is still current; a timer made stale by further edits does
/// nothing, so a burst of keystrokes triggers exactly one run (which
/// the coordinator's supersession handles even if timers race).
pub fn spawn_debounced_check(frontend: Arc<Frontend>, revision: u64) {
    spawn_debounced_check_after(frontend, revision, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
}

/// Same as [`spawn_debounced_check`] with an explicit delay.
pub fn spawn_debounced_check_after(frontend: Arc<Frontend>, revision: u64, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if frontend.revision() != revision {
            debug!(revision, "debounced check skipped, document changed");
            return;
        }
        frontend.check_now().await;
    });
}
