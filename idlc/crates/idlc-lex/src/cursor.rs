//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The lexer keeps one cursor over the whole buffer; scanners create
/// short-lived cursors over the remaining text to measure a match.
///
/// # Example
///
/// ```
/// use idlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("interface");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or '\0' at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one,
    /// or '\0' past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a…b");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), '…');
    /// assert_eq!(cursor.peek_char(2), 'b');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.bump_location(c);
        }
    }

    /// Advances past the next `count` bytes of source.
    ///
    /// The line counter grows by the number of `\n` characters in the
    /// skipped text. `count` is clamped to the remaining input and must
    /// land on a character boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("/* a\nb\n*/x");
    /// cursor.advance_bytes(9);
    /// assert_eq!(cursor.current_char(), 'x');
    /// assert_eq!(cursor.line(), 3);
    /// assert_eq!(cursor.column(), 3);
    /// ```
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        let skipped = &self.source[self.position..end];

        for c in skipped.chars() {
            self.bump_location(c);
        }

        self.position = end;
    }

    fn bump_location(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes characters while `predicate` holds, returning how many
    /// bytes were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0x1F;");
    /// cursor.advance_bytes(2);
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_hexdigit()), 2);
    /// assert_eq!(cursor.current_char(), ';');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
        self.position - start
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("-1");
    /// assert!(cursor.match_char('-'));
    /// assert!(!cursor.match_char('-'));
    /// assert_eq!(cursor.current_char(), '1');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Matches and consumes `expected` if the remaining text starts with it.
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.advance_bytes(expected.len());
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("long long");
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(0), "long");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("// a\nfoo");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_bytes(5);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// assert_eq!(cursor.line(), 1);
    /// ```
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("attribute long x;");
        assert_eq!(cursor.current_char(), 'a');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_advance_bytes_counts_characters_for_column() {
        let mut cursor = Cursor::new("/* é */x");
        cursor.advance_bytes(8);
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.column(), 8);
    }

    #[test]
    fn test_advance_bytes_clamps_at_end() {
        let mut cursor = Cursor::new("ab\n");
        cursor.advance_bytes(50);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("line1\nline2\nline3");
        cursor.advance_bytes(5);
        assert_eq!(cursor.column(), 6);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.advance_bytes(6);
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_match_str() {
        let mut cursor = Cursor::new("...;");
        assert!(!cursor.match_str(".;"));
        assert!(cursor.match_str("..."));
        assert_eq!(cursor.remaining(), ";");
    }

    #[test]
    fn test_nul_in_source_is_not_end() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
        assert!(cursor.match_char('\0'));
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.eat_while(|_| true), 0);
    }
}
