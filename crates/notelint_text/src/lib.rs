//! # notelint_text
//!
//! Document coordinate translation for NoteLint.
//!
//! The external linter reports issue locations as UTF-8 byte offsets,
//! while the editor addresses text in UTF-16 code units. These diverge
//! for every multi-byte character, so this crate keeps the two unit
//! systems as distinct types and provides exact, invertible conversion
//! between them over an immutable document snapshot.
//!
//! ## Example
//!
//! ```rust
//! use notelint_text::{DocumentIndex, EditorPosition};
//!
//! let index = DocumentIndex::new("Hello\nWorld");
//! assert_eq!(index.to_editor_offset(1, 3), 9);
//! assert_eq!(index.from_editor_offset(9), EditorPosition::new(1, 3));
//! ```

mod index;
mod position;

pub use index::{DocumentIndex, PositionError};
pub use position::{BytePosition, EditorPosition, EditorSpan};
