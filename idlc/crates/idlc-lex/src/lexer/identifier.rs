//! Identifier scanning.
//!
//! Identifiers are an optional `_` followed by an ASCII letter and then
//! letters, digits and underscores. The leading underscore escapes names
//! that would otherwise be keywords: `_interface` is the identifier
//! `interface`.

use crate::chars::{is_ident_continue, is_ident_start};
use crate::cursor::Cursor;
use crate::rules::Scan;

/// Scans an identifier at the start of `rest`.
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::scan_identifier;
/// use idlc_lex::Scan;
///
/// assert_eq!(scan_identifier("foo_bar2;"), Scan::Hit(8));
/// assert_eq!(scan_identifier("_long"), Scan::Hit(5));
/// assert_eq!(scan_identifier("__x"), Scan::Miss);
/// assert_eq!(scan_identifier("2x"), Scan::Miss);
/// ```
pub fn scan_identifier(rest: &str) -> Scan {
    let mut cursor = Cursor::new(rest);
    cursor.match_char('_');

    if !is_ident_start(cursor.current_char()) {
        return Scan::Miss;
    }
    cursor.advance();
    cursor.eat_while(is_ident_continue);

    Scan::Hit(cursor.position())
}

/// The name an identifier lexeme denotes.
///
/// With `strip_underscore` set, one leading `_` is removed.
pub fn identifier_name(text: &str, strip_underscore: bool) -> &str {
    if strip_underscore {
        text.strip_prefix('_').unwrap_or(text)
    } else {
        text
    }
}
