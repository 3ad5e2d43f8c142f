//! Comment scanning.
//!
//! Two shapes are recognised:
//! - block comments, `/*` up to the first `*/` (no nesting)
//! - runs of line comments, where each further `//` line follows the
//!   previous one after a single newline and optional spaces or tabs

use crate::chars::is_inline_space;
use crate::cursor::Cursor;
use crate::rules::Scan;

/// Scans a comment at the start of `rest`.
///
/// An unclosed block comment consumes the rest of the input and is reported
/// as [`Scan::Unterminated`].
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::scan_comment;
/// use idlc_lex::Scan;
///
/// assert_eq!(scan_comment("/* a */ b"), Scan::Hit(7));
/// assert_eq!(scan_comment("// a\n  // b\nc"), Scan::Hit(11));
/// assert_eq!(scan_comment("/* a"), Scan::Unterminated(4));
/// assert_eq!(scan_comment("/ a"), Scan::Miss);
/// ```
pub fn scan_comment(rest: &str) -> Scan {
    if rest.starts_with("/*") {
        scan_block_comment(rest)
    } else if rest.starts_with("//") {
        Scan::Hit(scan_line_comments(rest))
    } else {
        Scan::Miss
    }
}

fn scan_block_comment(rest: &str) -> Scan {
    match rest[2..].find("*/") {
        Some(close) => Scan::Hit(2 + close + 2),
        None => Scan::Unterminated(rest.len()),
    }
}

fn scan_line_comments(rest: &str) -> usize {
    let mut cursor = Cursor::new(rest);

    loop {
        cursor.eat_while(|c| c != '\n');
        let end = cursor.position();

        // The run continues only if the next line is another `//` comment.
        if !cursor.match_char('\n') {
            return end;
        }
        cursor.eat_while(is_inline_space);
        if !cursor.remaining().starts_with("//") {
            return end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_comment_is_not_greedy() {
        assert_eq!(scan_comment("/* a */ x /* b */"), Scan::Hit(7));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let src = "/* multi\nline */bar";
        assert_eq!(scan_comment(src), Scan::Hit(16));
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        assert_eq!(scan_comment("/* /* */ */"), Scan::Hit(8));
    }

    #[test]
    fn test_minimal_block_comments() {
        assert_eq!(scan_comment("/**/"), Scan::Hit(4));
        // The opening `*` cannot double as the closing one.
        assert_eq!(scan_comment("/*/"), Scan::Unterminated(3));
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        assert_eq!(scan_comment("// hello\nfoo;"), Scan::Hit(8));
        assert_eq!(scan_comment("//"), Scan::Hit(2));
    }

    #[test]
    fn test_line_comment_run() {
        let src = "// one\n// two\n\t// three\nx";
        assert_eq!(scan_comment(src), Scan::Hit(src.len() - 2));
    }

    #[test]
    fn test_blank_line_breaks_run() {
        assert_eq!(scan_comment("// one\n\n// two"), Scan::Hit(6));
    }

    #[test]
    fn test_crlf_line_comment() {
        // `\r` is not a line break, so it stays inside the comment text.
        assert_eq!(scan_comment("// a\r\n// b"), Scan::Hit(10));
    }
}
