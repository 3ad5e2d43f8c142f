//! Error types for lexing and lexer configuration.

use std::path::PathBuf;

use idlc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

use crate::token::TokenKind;

/// A lexical error.
///
/// Every error is resumable: the offending text has already been consumed
/// when the error is returned, and the next call to
/// [`Lexer::next_token`](crate::Lexer::next_token) continues after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No rule matches at the current position.
    #[error("illegal character {ch:?} on line {}", .span.line)]
    IllegalCharacter {
        /// The character that was skipped
        ch: char,
        /// Location of the character
        span: Span,
    },

    /// `/*` without a closing `*/`; the rest of the input was consumed.
    #[error("unterminated block comment starting on line {}", .span.line)]
    UnterminatedBlockComment {
        /// From the opening `/*` to the end of input
        span: Span,
    },

    /// `"` without a closing quote; the rest of the input was consumed.
    #[error("unterminated string literal starting on line {}", .span.line)]
    UnterminatedString {
        /// From the opening quote to the end of input
        span: Span,
    },

    /// A custom rule opened a construct it could not close.
    #[error("unterminated {kind} starting on line {}", .span.line)]
    Unterminated {
        /// Kind of the rule that reported the unterminated match
        kind: TokenKind,
        /// The consumed text
        span: Span,
    },

    /// A numeric literal whose value cannot be represented.
    #[error("numeric literal {text:?} on line {} is out of range", .span.line)]
    NumberOutOfRange {
        /// The literal as written
        text: String,
        /// Location of the literal
        span: Span,
    },
}

impl LexError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            LexError::IllegalCharacter { span, .. }
            | LexError::UnterminatedBlockComment { span }
            | LexError::UnterminatedString { span }
            | LexError::Unterminated { span, .. }
            | LexError::NumberOutOfRange { span, .. } => *span,
        }
    }

    /// 1-based line where the offending text starts.
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IllegalCharacter { .. } => DiagnosticCode::E_LEXER_ILLEGAL_CHAR,
            LexError::UnterminatedBlockComment { .. } => {
                DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT
            },
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::Unterminated { kind, .. } => match kind {
                TokenKind::Comment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
                TokenKind::String => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                _ => DiagnosticCode::E_LEXER_UNTERMINATED,
            },
            LexError::NumberOutOfRange { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// Converts the error into a diagnostic, with a help message where a
    /// fix is obvious.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(self.span());

        match self {
            LexError::UnterminatedBlockComment { .. } => {
                builder.help("close the comment with `*/`").build()
            },
            LexError::UnterminatedString { .. } => {
                builder.help("add the closing `\"`").build()
            },
            LexError::NumberOutOfRange { .. } => builder
                .note("integer literals must fit in `long long` or `unsigned long long`")
                .build(),
            _ => builder.build(),
        }
    }
}

/// A token kind name that names no kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind {0:?}")]
pub struct ParseKindError(pub String);

/// Error loading or saving a [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access lexer config {}: {source}", .path.display())]
    Io {
        /// The configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for a lexer config.
    #[error("invalid lexer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize lexer config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
