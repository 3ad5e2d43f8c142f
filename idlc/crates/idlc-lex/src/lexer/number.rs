//! Number literal scanning and decoding.
//!
//! # Number Formats
//!
//! - Decimal integer: `42`, `-7`
//! - Hexadecimal integer: `0xFF`, `0X1a`
//! - Octal integer: `0`, `0755`
//! - Float: `3.14`, `1.`, `.5`, `1e10`, `-2.5E-3`
//!
//! Integers decode to `i128` so that the full `long long` and
//! `unsigned long long` ranges fit; anything outside them is rejected.

use crate::chars::is_digit_in_base;
use crate::cursor::Cursor;
use crate::rules::Scan;

/// Scans a float literal at the start of `rest`.
///
/// Either a mantissa with a `.` and at least one digit, optionally followed
/// by an exponent, or digits followed by a mandatory exponent.
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::scan_float;
/// use idlc_lex::Scan;
///
/// assert_eq!(scan_float("1.5;"), Scan::Hit(3));
/// assert_eq!(scan_float("-.5e3"), Scan::Hit(5));
/// assert_eq!(scan_float("2E8"), Scan::Hit(3));
/// assert_eq!(scan_float("42"), Scan::Miss);
/// ```
pub fn scan_float(rest: &str) -> Scan {
    let mut cursor = Cursor::new(rest);
    cursor.match_char('-');

    let int_digits = cursor.eat_while(|c| c.is_ascii_digit());
    let has_dot = cursor.match_char('.');
    let frac_digits = if has_dot {
        cursor.eat_while(|c| c.is_ascii_digit())
    } else {
        0
    };

    if int_digits + frac_digits == 0 {
        return Scan::Miss;
    }

    let has_exponent = eat_exponent(&mut cursor);
    if has_dot || has_exponent {
        Scan::Hit(cursor.position())
    } else {
        Scan::Miss
    }
}

/// Consumes `[Ee][+-]?[0-9]+` if present, leaving the cursor untouched
/// otherwise.
fn eat_exponent(cursor: &mut Cursor<'_>) -> bool {
    let snapshot = cursor.snapshot();

    if !(cursor.match_char('e') || cursor.match_char('E')) {
        return false;
    }
    if !cursor.match_char('+') {
        cursor.match_char('-');
    }
    if cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
        cursor.restore(snapshot);
        return false;
    }
    true
}

/// Scans an integer literal at the start of `rest`.
///
/// A leading `0` starts an octal literal (or `0x`/`0X` a hexadecimal one),
/// so `09` scans as `0` followed by a separate `9`.
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::scan_integer;
/// use idlc_lex::Scan;
///
/// assert_eq!(scan_integer("0x1F)"), Scan::Hit(4));
/// assert_eq!(scan_integer("-12,"), Scan::Hit(3));
/// assert_eq!(scan_integer("09"), Scan::Hit(1));
/// assert_eq!(scan_integer("x"), Scan::Miss);
/// ```
pub fn scan_integer(rest: &str) -> Scan {
    let mut cursor = Cursor::new(rest);
    cursor.match_char('-');

    match cursor.current_char() {
        '1'..='9' => {
            cursor.eat_while(|c| c.is_ascii_digit());
        },
        '0' => {
            cursor.advance();
            let after_zero = cursor.snapshot();
            if cursor.match_char('x') || cursor.match_char('X') {
                if cursor.eat_while(|c| is_digit_in_base(c, 16)) == 0 {
                    // `0x` with no digits is just the literal `0`.
                    cursor.restore(after_zero);
                }
            } else {
                cursor.eat_while(|c| is_digit_in_base(c, 8));
            }
        },
        _ => return Scan::Miss,
    }

    Scan::Hit(cursor.position())
}

/// Decodes an integer lexeme, or `None` if it is out of range.
///
/// The accepted range is `-2^63 ..= 2^64 - 1`.
///
/// # Example
///
/// ```
/// use idlc_lex::lexer::parse_integer;
///
/// assert_eq!(parse_integer("0x10"), Some(16));
/// assert_eq!(parse_integer("010"), Some(8));
/// assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN as i128));
/// assert_eq!(parse_integer("18446744073709551616"), None);
/// ```
pub fn parse_integer(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        u64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<u64>().ok()?
    };

    let magnitude = i128::from(magnitude);
    if negative {
        let value = -magnitude;
        (value >= i128::from(i64::MIN)).then_some(value)
    } else {
        Some(magnitude)
    }
}

/// Decodes a float lexeme, or `None` if it does not fit in an `f64`.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_forms() {
        assert_eq!(scan_float("1."), Scan::Hit(2));
        assert_eq!(scan_float(".5"), Scan::Hit(2));
        assert_eq!(scan_float("1.e5"), Scan::Hit(4));
        assert_eq!(scan_float("1e+5x"), Scan::Hit(4));
        assert_eq!(scan_float("-3.25E-2;"), Scan::Hit(8));
    }

    #[test]
    fn test_float_rejects_bare_dot_and_missing_exponent() {
        assert_eq!(scan_float("."), Scan::Miss);
        assert_eq!(scan_float("-."), Scan::Miss);
        assert_eq!(scan_float("1e"), Scan::Miss);
        assert_eq!(scan_float("1e+"), Scan::Miss);
        assert_eq!(scan_float("-"), Scan::Miss);
    }

    #[test]
    fn test_float_dangling_exponent_is_left_behind() {
        // `1.5e` is the float `1.5` followed by whatever `e` starts.
        assert_eq!(scan_float("1.5e"), Scan::Hit(3));
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(scan_integer("0"), Scan::Hit(1));
        assert_eq!(scan_integer("0755"), Scan::Hit(4));
        assert_eq!(scan_integer("0758"), Scan::Hit(3));
        assert_eq!(scan_integer("0x"), Scan::Hit(1));
        assert_eq!(scan_integer("0XdeadBEEF"), Scan::Hit(10));
        assert_eq!(scan_integer("-0"), Scan::Hit(2));
        assert_eq!(scan_integer("-"), Scan::Miss);
        assert_eq!(scan_integer("-a"), Scan::Miss);
    }

    #[test]
    fn test_parse_integer_bases() {
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("-0"), Some(0));
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-42"), Some(-42));
        assert_eq!(parse_integer("0755"), Some(0o755));
        assert_eq!(parse_integer("0XFF"), Some(255));
        assert_eq!(parse_integer("-0x10"), Some(-16));
    }

    #[test]
    fn test_parse_integer_range() {
        assert_eq!(parse_integer("0xFFFFFFFFFFFFFFFF"), Some(u64::MAX as i128));
        assert_eq!(parse_integer("0x10000000000000000"), None);
        assert_eq!(parse_integer("-9223372036854775809"), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1."), Some(1.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("-2.5e-1"), Some(-0.25));
        assert_eq!(parse_float("1e999"), None);
    }
}
