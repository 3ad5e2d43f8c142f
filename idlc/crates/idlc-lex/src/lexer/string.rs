//! String literal scanning.
//!
//! Web IDL strings are `"` followed by any characters other than `"` and a
//! closing `"`. There are no escape sequences, and a string may span lines.

use crate::rules::Scan;

/// Scans a string literal at the start of `rest`.
///
/// A missing closing quote consumes the rest of the input and is reported
/// as [`Scan::Unterminated`].
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::scan_string;
/// use idlc_lex::Scan;
///
/// assert_eq!(scan_string("\"abc\" x"), Scan::Hit(5));
/// assert_eq!(scan_string("\"abc"), Scan::Unterminated(4));
/// assert_eq!(scan_string("abc"), Scan::Miss);
/// ```
pub fn scan_string(rest: &str) -> Scan {
    let Some(body) = rest.strip_prefix('"') else {
        return Scan::Miss;
    };

    match body.find('"') {
        Some(close) => Scan::Hit(1 + close + 1),
        None => Scan::Unterminated(rest.len()),
    }
}

/// The body of a string lexeme, without its quotes.
///
/// Lexemes produced by custom rules that are not quoted are returned as-is.
pub fn string_body(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
