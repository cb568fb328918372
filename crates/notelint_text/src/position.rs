//! Position and span types for document locations.
//!
//! Byte-based and UTF-16-based coordinates are deliberately distinct
//! types so that a conversion can never be skipped by accident.

use serde::{Deserialize, Serialize};

/// A position expressed in UTF-16 code units.
///
/// This is the unit the editor natively uses for cursor and range
/// addressing. Lines and columns are both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorPosition {
    /// Line number (0-indexed).
    pub line: u32,
    /// Column in UTF-16 code units (0-indexed).
    pub column: u32,
}

impl EditorPosition {
    /// Creates a new editor position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A position expressed in UTF-8 bytes within a line.
///
/// Produced exclusively from the linter's output. Lines and byte
/// columns are both 0-indexed; the raw report's 1-based coordinates are
/// normalized when findings are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BytePosition {
    /// Line number (0-indexed).
    pub line: u32,
    /// Column in UTF-8 bytes (0-indexed).
    pub byte_column: u32,
}

impl BytePosition {
    /// Creates a new byte position.
    #[inline]
    pub const fn new(line: u32, byte_column: u32) -> Self {
        Self { line, byte_column }
    }
}

/// A half-open span of absolute UTF-16 offsets from document start.
///
/// Decorations and edit deltas use this representation because shifting
/// a span under an edit is a plain offset adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorSpan {
    /// Start offset (inclusive), in UTF-16 code units.
    pub start: u32,
    /// End offset (exclusive), in UTF-16 code units.
    pub end: u32,
}

impl EditorSpan {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in UTF-16 code units.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if this span and `other` share at least one offset,
    /// treating an empty `other` as a point between characters.
    #[inline]
    pub const fn overlaps(&self, other: &EditorSpan) -> bool {
        if other.is_empty() {
            // A point edit (pure insertion) only disturbs a span when it
            // lands strictly inside it.
            self.start < other.start && other.start < self.end
        } else {
            self.start < other.end && other.start < self.end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_editor_position() {
        let pos = EditorPosition::new(2, 7);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 7);
    }

    #[test]
    fn test_byte_position_is_distinct_type() {
        let pos = BytePosition::new(0, 3);
        assert_eq!(pos.byte_column, 3);
    }

    #[test]
    fn test_span_basics() {
        let span = EditorSpan::new(10, 15);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(span.contains(10));
        assert!(span.contains(14));
        assert!(!span.contains(15));
    }

    #[test]
    fn test_empty_span() {
        let span = EditorSpan::new(5, 5);
        assert!(span.is_empty());
        assert!(!span.contains(5));
    }

    #[test]
    fn test_overlaps_ranges() {
        let span = EditorSpan::new(10, 15);
        assert!(span.overlaps(&EditorSpan::new(12, 13)));
        assert!(span.overlaps(&EditorSpan::new(14, 20)));
        assert!(span.overlaps(&EditorSpan::new(5, 11)));
        assert!(!span.overlaps(&EditorSpan::new(0, 5)));
        assert!(!span.overlaps(&EditorSpan::new(15, 20)));
        // Touching at the boundary is not overlap
        assert!(!span.overlaps(&EditorSpan::new(0, 10)));
    }

    #[test]
    fn test_overlaps_point_insertion() {
        let span = EditorSpan::new(10, 15);
        // Insertion strictly inside invalidates
        assert!(span.overlaps(&EditorSpan::new(12, 12)));
        // Insertion at either boundary leaves the span intact
        assert!(!span.overlaps(&EditorSpan::new(10, 10)));
        assert!(!span.overlaps(&EditorSpan::new(15, 15)));
    }

    #[test]
    fn test_span_serialization() {
        let span = EditorSpan::new(3, 9);
        let json = serde_json::to_string(&span).unwrap();
        let back: EditorSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(span, back);
    }
}
