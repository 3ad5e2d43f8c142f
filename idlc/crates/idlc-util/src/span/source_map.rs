//! Source map for managing IDL files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use idlc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "node.idl", "interface Node {};");
/// assert_eq!(file.name(), "node.idl");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a trailing empty line after a final newline
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the 0-based line `line` starts
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to a 1-based (line, column) pair
    ///
    /// Columns count bytes, which matches characters for ASCII IDL text.
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.idl", "enum E {\n  \"a\"\n};");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(11), (2, 3));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // insert_point > 0 because line_starts[0] == 0
                let line = insert_point - 1;
                let col = offset - self.line_starts[line] + 1;
                (line + 1, col)
            },
        }
    }

    /// Get the text of the 1-based line `line`, without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract the text covered by `start..end`, validating the range
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A collection of source files
///
/// # Examples
///
/// ```
/// use idlc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("window.idl", "interface Window {};");
/// assert_eq!(map.get(id).unwrap().name(), "window.idl");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create an empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file, returning its [`FileId`]
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let file = SourceFile::new(self.files.len() + 1, name, content);
        let id = file.id();
        self.files.push(Arc::new(file));
        id
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        let index = id.0.checked_sub(1)?;
        self.files.get(index).cloned()
    }

    /// Get a source file by its ID, failing with [`SourceMapError::FileNotFound`]
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span as `--> file:line:col`, the source line, and a caret
    /// underline.
    ///
    /// Spans running past the end of their first line are underlined up to
    /// the end of that line.
    ///
    /// # Examples
    ///
    /// ```
    /// use idlc_util::span::{SourceMap, Span};
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("a.idl", "typedef long # Foo;");
    /// let rendered = map.format_span(Span::new(13, 14, 1, 14).in_file(id)).unwrap();
    /// assert!(rendered.starts_with("--> a.idl:1:14"));
    /// assert!(rendered.ends_with("^"));
    /// ```
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line = file.line_at(span.line as usize)?;
        let width = file.line_count().to_string().len().max(3);

        let underline_start = (span.column as usize).saturating_sub(1);
        let underline_len = span
            .len()
            .min(line.len().saturating_sub(underline_start))
            .max(1);

        let mut result = format!("--> {}:{}:{}\n", file.name(), span.line, span.column);
        result.push_str(&format!("{:>width$} | {}\n", span.line, line, width = width));
        result.push_str(&format!("{:>width$} | ", "", width = width));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        Some(result)
    }
}
