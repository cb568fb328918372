//! The seam to the external linter transport.

use async_trait::async_trait;

use crate::error::CheckError;

/// Executes the external linter against a document snapshot.
///
/// Implementations wrap the actual transport (CLI spawn or HTTP call)
/// and resolve with the linter's raw structured report, or a
/// `CheckError` when the linter is unavailable or exits abnormally.
/// Timeout policy belongs to the transport; from this crate's
/// perspective every execution eventually resolves.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Runs one check and returns the raw report text.
    async fn execute(&self, text: &str) -> Result<String, CheckError>;
}
