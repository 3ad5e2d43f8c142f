//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! # Examples
//!
//! ```
//! use idlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1xxx)
    // =========================================================================

    /// E1001: Lexer - Character matched by no rule
    pub const E_LEXER_ILLEGAL_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Numeric literal that cannot be represented
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Lexer - Construct of a custom rule left open at end of input
    pub const E_LEXER_UNTERMINATED: Self = Self::new("E", 1004);
    /// E1005: Lexer - Block comment without closing `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);

    // =========================================================================
    // CONFIGURATION WARNING CODES (W0xxx)
    // =========================================================================

    /// W0001: Configuration names a token kind no rule produces
    pub const W_UNUSED_SUPPRESSION: Self = Self::new("W", 1);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
