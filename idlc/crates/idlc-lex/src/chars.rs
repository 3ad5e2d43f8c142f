//! Character classes used by the Web IDL scanners.
//!
//! Web IDL is defined over ASCII; anything outside these classes is either
//! inside a comment or string body, or an illegal character.

/// Checks if a character may start an identifier (after the optional `_`).
///
/// # Example
///
/// ```
/// use idlc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use idlc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// # Example
///
/// ```
/// use idlc_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('g', 16));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Space or tab: the indentation allowed between joined line comments.
#[inline]
pub fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Whitespace the lexer always skips.
///
/// Carriage returns are accepted so CRLF files lex the same as LF files;
/// only `\n` advances the line counter.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_classes() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('\u{000B}'));
        assert!(is_inline_space('\t'));
        assert!(!is_inline_space('\n'));
    }

    #[test]
    fn test_unsupported_base() {
        assert!(!is_digit_in_base('1', 2));
    }
}
