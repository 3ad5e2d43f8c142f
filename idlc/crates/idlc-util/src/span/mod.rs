//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use idlc_util::span::{FileId, Span};
//!
//! // A span covering bytes 10..20 that starts on line 1, column 5
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//!
//! // The same span attached to a specific file
//! let span = span.in_file(FileId(3));
//! assert_eq!(span.file_id, FileId(3));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially from 1 as files are added to the
/// [`SourceMap`]; `FileId(0)` is reserved for [`FileId::DUMMY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// The file id used when no source map is involved. No
    /// [`SourceMap`] file ever has it.
    pub const DUMMY: FileId = FileId(0);

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the start (for human-readable output)
/// - File ID (for multi-file inputs)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Returns this span attached to `file_id`.
    #[inline]
    pub const fn in_file(self, file_id: FileId) -> Self {
        Self { file_id, ..self }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::Span;
    ///
    /// let first = Span::new(10, 20, 1, 5);
    /// let second = Span::new(25, 35, 2, 1);
    /// let merged = second.merge(first);
    /// assert_eq!((merged.start, merged.end), (10, 35));
    /// assert_eq!((merged.line, merged.column), (1, 5));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let head = if other.start < self.start { other } else { self };
        Span {
            start: head.start,
            end: self.end.max(other.end),
            line: head.line,
            column: head.column,
            file_id: self.file_id,
        }
    }
}
