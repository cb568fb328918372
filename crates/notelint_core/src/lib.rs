//! # notelint_core
//!
//! Alert data model and check execution coordination for NoteLint.
//!
//! This crate provides:
//! - The `Alert` record parsed from the external linter's raw report
//! - The `Checker` trait, the seam to the CLI/server transport adapter
//! - The single-flight `CheckCoordinator`
//!
//! ## Example
//!
//! ```rust,ignore
//! use notelint_core::{CheckCoordinator, CheckOutcome};
//!
//! let coordinator = CheckCoordinator::new(checker);
//! match coordinator.request_check(&text).await {
//!     CheckOutcome::Completed(alerts) => render(alerts),
//!     CheckOutcome::Superseded => {}
//!     CheckOutcome::Failed(err) => report(err),
//! }
//! ```

mod alert;
mod checker;
mod coordinator;
mod error;
mod findings;
mod run;

pub use alert::{Alert, AlertId, Severity};
pub use checker::Checker;
pub use coordinator::{CheckCoordinator, CheckOutcome};
pub use error::CheckError;
pub use findings::parse_findings;
pub use run::{CheckRun, RequestId, RunStatus};
