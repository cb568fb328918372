//! Alert types for parsed linter findings.

use serde::{Deserialize, Serialize};

use notelint_text::BytePosition;

/// Severity level of a linter finding.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Suggestion - stylistic advice.
    #[default]
    Suggestion,
}

impl Severity {
    /// Parses the linter's severity string, case-insensitively.
    ///
    /// Unknown strings map to `Suggestion` rather than failing the run.
    pub fn from_report(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Suggestion,
        }
    }
}

/// Identifier of an alert, unique within one check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlertId(pub u64);

/// One linter finding, immutable once parsed.
///
/// Spans are byte-based because that is the linter's native reporting
/// convention; they are converted to editor coordinates only when
/// decorations are bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Identifier, unique within the run that produced this alert.
    pub id: AlertId,

    /// The rule that generated this finding.
    pub rule_id: String,

    /// Severity level.
    pub severity: Severity,

    /// Human-readable message.
    pub message: String,

    /// Span start, in UTF-8 bytes.
    pub start: BytePosition,

    /// Span end (exclusive), in UTF-8 bytes.
    pub end: BytePosition,

    /// Suggested replacement strings, possibly empty.
    pub replacements: Vec<String>,
}

impl Alert {
    /// Creates a new alert.
    pub fn new(
        id: AlertId,
        rule_id: impl Into<String>,
        message: impl Into<String>,
        start: BytePosition,
        end: BytePosition,
    ) -> Self {
        Self {
            id,
            rule_id: rule_id.into(),
            severity: Severity::default(),
            message: message.into(),
            start,
            end,
            replacements: Vec::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the suggested replacements.
    pub fn with_replacements(mut self, replacements: Vec<String>) -> Self {
        self.replacements = replacements;
        self
    }
}
