//! Decoration data model.

use serde::{Deserialize, Serialize};

use notelint_core::{AlertId, Severity};
use notelint_text::EditorSpan;

/// Severity-derived style class applied when rendering a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleClass {
    Error,
    Warning,
    Suggestion,
}

impl StyleClass {
    /// The CSS class name the rendering layer attaches to the marker.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "notelint-error",
            Self::Warning => "notelint-warning",
            Self::Suggestion => "notelint-suggestion",
        }
    }
}

impl From<Severity> for StyleClass {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warning,
            Severity::Suggestion => Self::Suggestion,
        }
    }
}

/// A live range marker bound to exactly one alert.
///
/// Owned exclusively by the `DecorationStore`; everything else refers
/// to a decoration by `alert_id` only. The span is kept in absolute
/// UTF-16 offsets and is adjusted in place as the document mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// The alert this marker annotates.
    pub alert_id: AlertId,
    /// Current span, in absolute UTF-16 offsets.
    pub span: EditorSpan,
    /// Style class derived from the alert's severity.
    pub style: StyleClass,
}

impl Decoration {
    /// Creates a new decoration.
    pub fn new(alert_id: AlertId, span: EditorSpan, style: StyleClass) -> Self {
        Self {
            alert_id,
            span,
            style,
        }
    }
}

/// One document mutation, as reported by the editor's change tracker.
///
/// `from..to` is the removed span (empty for a pure insertion) and
/// `inserted` is the replacement text, all in UTF-16 offsets/units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDelta {
    /// Start of the removed span (inclusive).
    pub from: u32,
    /// End of the removed span (exclusive).
    pub to: u32,
    /// Text inserted in place of the removed span.
    pub inserted: String,
}

impl EditDelta {
    /// Creates a new edit delta.
    pub fn new(from: u32, to: u32, inserted: impl Into<String>) -> Self {
        Self {
            from,
            to,
            inserted: inserted.into(),
        }
    }

    /// The removed span.
    pub fn removed_span(&self) -> EditorSpan {
        EditorSpan::new(self.from, self.to)
    }

    /// Length of the inserted text in UTF-16 code units.
    pub fn inserted_units(&self) -> u32 {
        self.inserted.encode_utf16().count() as u32
    }

    /// Net length change in UTF-16 code units.
    pub fn net_delta(&self) -> i64 {
        i64::from(self.inserted_units()) - i64::from(self.to - self.from)
    }

    /// True when applying this delta changes nothing.
    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.inserted.is_empty()
    }
}
