//! Precomputed line index over an immutable document snapshot.
//!
//! Per-line lengths are computed once in both UTF-8 bytes and UTF-16
//! code units, so converting hundreds of alert spans after one check
//! does not rescan the document per span.

use thiserror::Error;

use crate::position::{BytePosition, EditorPosition};

/// Errors resolving a linter-reported position against a snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    /// The line number does not exist in this snapshot.
    #[error("line {0} out of range")]
    LineOutOfRange(u32),

    /// The byte column lies past the end of the line.
    #[error("byte column {column} out of range on line {line}")]
    ColumnOutOfRange { line: u32, column: u32 },
}

/// Per-line metadata in both unit systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineEntry {
    /// Byte offset of line start from document start.
    byte_start: u32,
    /// Line length in UTF-8 bytes, excluding the newline.
    byte_len: u32,
    /// UTF-16 offset of line start from document start.
    unit_start: u32,
    /// Line length in UTF-16 code units, excluding the newline.
    unit_len: u32,
}

/// An indexed, read-only snapshot of a document.
///
/// A snapshot always has at least one line; empty text is a single
/// empty line. Newlines count as one byte and one code unit.
///
/// Out-of-range inputs clamp to the nearest valid position rather than
/// failing, matching "offset describes a point in or at the end of the
/// document" semantics expected by callers. A column past the end of
/// its line likewise clamps to line end; this preserves the observable
/// behavior relied on for malformed alert spans.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    text: String,
    lines: Vec<LineEntry>,
    /// Total document length in UTF-16 code units.
    total_units: u32,
}

impl DocumentIndex {
    /// Indexes a document snapshot in a single pass.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut byte_start = 0u32;
        let mut unit_start = 0u32;

        for line in text.split('\n') {
            let byte_len = line.len() as u32;
            let unit_len = line.encode_utf16().count() as u32;
            lines.push(LineEntry {
                byte_start,
                byte_len,
                unit_start,
                unit_len,
            });
            // +1 for the newline separating this line from the next
            byte_start += byte_len + 1;
            unit_start += unit_len + 1;
        }

        let last = lines.last().copied().unwrap_or(LineEntry {
            byte_start: 0,
            byte_len: 0,
            unit_start: 0,
            unit_len: 0,
        });
        let total_units = last.unit_start + last.unit_len;

        Self {
            text,
            lines,
            total_units,
        }
    }

    /// Number of lines in the snapshot (always >= 1).
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Total document length in UTF-16 code units.
    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    /// The underlying text of the snapshot.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the given line in UTF-16 code units, excluding the
    /// newline. Returns `None` for a line out of range.
    pub fn line_unit_len(&self, line: u32) -> Option<u32> {
        self.lines.get(line as usize).map(|e| e.unit_len)
    }

    fn line_text(&self, entry: &LineEntry) -> &str {
        let start = entry.byte_start as usize;
        let end = start + entry.byte_len as usize;
        &self.text[start..end]
    }

    /// Converts (line, UTF-16 column) to an absolute UTF-16 offset.
    ///
    /// The line clamps to the last line; a column past line end clamps
    /// to line end.
    pub fn to_editor_offset(&self, line: u32, column: u32) -> u32 {
        let entry = self.clamped_line(line);
        entry.unit_start + column.min(entry.unit_len)
    }

    /// Converts an absolute UTF-16 offset back to a position.
    ///
    /// Offsets past the end of the document clamp to the last valid
    /// position. An offset pointing at a newline maps to the end of the
    /// preceding line.
    pub fn from_editor_offset(&self, offset: u32) -> EditorPosition {
        let offset = offset.min(self.total_units);
        let idx = self
            .lines
            .partition_point(|e| e.unit_start <= offset)
            .saturating_sub(1);
        let entry = &self.lines[idx];
        let column = (offset - entry.unit_start).min(entry.unit_len);
        EditorPosition::new(idx as u32, column)
    }

    /// Converts (line, UTF-16 column) to an absolute UTF-8 byte offset.
    ///
    /// Every character is sized by its UTF-8 encoded length (1-4
    /// bytes); a surrogate pair is one 4-byte character, so a column
    /// landing inside a pair snaps back to the character start.
    pub fn to_byte_offset(&self, line: u32, column: u32) -> u32 {
        let entry = self.clamped_line(line);
        let mut units = 0u32;
        let mut bytes = 0u32;
        for ch in self.line_text(entry).chars() {
            let width = ch.len_utf16() as u32;
            if units + width > column {
                break;
            }
            units += width;
            bytes += ch.len_utf8() as u32;
            if units == column {
                break;
            }
        }
        entry.byte_start + bytes
    }

    /// Converts an absolute UTF-8 byte offset to an editor position.
    ///
    /// Past-end offsets clamp to document end; an offset inside a
    /// multi-byte character snaps to the character start.
    pub fn from_byte_offset(&self, byte_offset: u32) -> EditorPosition {
        let byte_offset = (byte_offset as usize).min(self.text.len()) as u32;
        let idx = self
            .lines
            .partition_point(|e| e.byte_start <= byte_offset)
            .saturating_sub(1);
        let entry = &self.lines[idx];
        let target = (byte_offset - entry.byte_start).min(entry.byte_len);

        let mut units = 0u32;
        let mut bytes = 0u32;
        for ch in self.line_text(entry).chars() {
            let width = ch.len_utf8() as u32;
            if bytes + width > target {
                break;
            }
            bytes += width;
            units += ch.len_utf16() as u32;
        }
        EditorPosition::new(idx as u32, units)
    }

    /// Resolves a linter-reported byte position to an absolute UTF-16
    /// offset, or reports why it does not fit this snapshot.
    ///
    /// Unlike the clamping conversions above, a position that points
    /// outside the snapshot is an error here: the caller uses it to
    /// drop alerts whose spans the document has outgrown.
    pub fn resolve_byte_position(&self, pos: &BytePosition) -> Result<u32, PositionError> {
        let entry = self
            .lines
            .get(pos.line as usize)
            .ok_or(PositionError::LineOutOfRange(pos.line))?;
        if pos.byte_column > entry.byte_len {
            return Err(PositionError::ColumnOutOfRange {
                line: pos.line,
                column: pos.byte_column,
            });
        }

        let mut units = 0u32;
        let mut bytes = 0u32;
        for ch in self.line_text(entry).chars() {
            let width = ch.len_utf8() as u32;
            if bytes + width > pos.byte_column {
                break;
            }
            bytes += width;
            units += ch.len_utf16() as u32;
        }
        Ok(entry.unit_start + units)
    }

    /// Reports whether (line, column) addresses a point in or at the
    /// end of a line of this snapshot. Never panics.
    pub fn is_valid_position(&self, line: i64, column: i64) -> bool {
        if line < 0 || column < 0 {
            return false;
        }
        match self.lines.get(line as usize) {
            Some(entry) => column <= i64::from(entry.unit_len),
            None => false,
        }
    }

    /// Repairs a position to the nearest valid one: negative components
    /// clamp to 0, a line past the end clamps to document end, and a
    /// column past line end clamps to line end.
    pub fn clamp_position(&self, line: i64, column: i64) -> EditorPosition {
        if line >= self.lines.len() as i64 {
            let last = (self.lines.len() - 1) as u32;
            return EditorPosition::new(last, self.lines[last as usize].unit_len);
        }
        let line = line.max(0) as u32;
        let column = column.max(0).min(i64::from(self.lines[line as usize].unit_len)) as u32;
        EditorPosition::new(line, column)
    }

    fn clamped_line(&self, line: u32) -> &LineEntry {
        let idx = (line as usize).min(self.lines.len() - 1);
        &self.lines[idx]
    }
}
