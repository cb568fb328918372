//! Check run bookkeeping.

use serde::{Deserialize, Serialize};

/// Monotonically increasing identifier of a check request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// Lifecycle state of one execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Accepted, not yet handed to the transport.
    Pending,
    /// Handed to the transport, awaiting its result.
    Running,
    /// Resolved and applied.
    Completed,
    /// Resolved after a newer request took over; result discarded.
    Superseded,
    /// The transport or report parsing failed.
    Failed,
}

/// One execution attempt of the linter.
///
/// At most one run is `Running` at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRun {
    /// Request identifier.
    pub id: RequestId,
    /// Current lifecycle state.
    pub status: RunStatus,
}

impl CheckRun {
    pub(crate) fn new(id: RequestId) -> Self {
        Self {
            id,
            status: RunStatus::Pending,
        }
    }
}
