//! idlc-lex - Lexical Analyzer for Web IDL
//!
//! This crate turns Web IDL source text into a stream of tokens for a
//! parser. Comments are recognised but, by default, never emitted; the
//! newlines inside them still count, so every token carries its true
//! physical line.
//!
//! # Example Usage
//!
//! ```
//! use idlc_lex::{Lexer, TokenKind, Value};
//!
//! let source = "/* multi\nline */bar";
//! let mut lexer = Lexer::new(source);
//!
//! let bar = lexer.next_token().unwrap();
//! assert_eq!(bar.kind, TokenKind::Identifier);
//! assert_eq!(bar.value, Value::Ident("bar"));
//! assert_eq!(bar.line(), 2);
//!
//! // Or iterate; the iterator ends at end of input
//! for token in idlc_lex::Lexer::new("const long X = 0x10;") {
//!     let token = token.unwrap();
//!     println!("{token}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind, keyword and value types
//! - [`rules`] - The ordered rule table and longest-match selection
//! - [`lexer`] - The lexer and the per-construct scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`config`] - Suppressed kinds and decoding options, loadable from TOML
//! - [`error`] - Lexical and configuration errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words, matched exactly and case-sensitively: `interface`,
//! `attribute`, `DOMString`, `legacycaller`, ... (see [`Keyword`]). A
//! keyword preceded by `_` is an identifier.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `-7`, `0xFF`, `0755`
//! - **Float**: `3.14`, `.5`, `1e10`, `-2.5E-3`
//! - **String**: `"hello"` (no escapes, may span lines)
//! - **Identifier**: `foo`, `_interface`
//!
//! ## Punctuation
//!
//! `* . ( ) { } [ ] , ; : = + - / ~ | < > & ^ ?`, plus `...` and
//! `-Infinity`.
//!
//! ## Special
//!
//! - **COMMENT**: `/* ... */` or a run of `//` lines; suppressed by default
//! - **EOF**: End of input marker

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod rules;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexerConfig, CONFIG_FILE_NAME};
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, LexError, ParseKindError};
pub use lexer::Lexer;
pub use rules::{Matched, Pattern, Rule, RuleTable, Scan};
pub use token::{keyword_from_ident, Keyword, Token, TokenKind, Value};

use idlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, SourceSnippet};
use tracing::debug;

/// Lexes all of `source` with the default configuration, collecting tokens
/// and errors separately.
///
/// The returned tokens do not include the end-of-input token.
///
/// # Example
///
/// ```
/// let (tokens, errors) = idlc_lex::tokenize("a # b");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].line(), 1);
/// ```
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in Lexer::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    debug!(tokens = tokens.len(), errors = errors.len(), "tokenized");
    (tokens, errors)
}

/// Lexes all of `source`, emitting every error into `handler` and carrying
/// on past it.
///
/// Suppressed kinds that no rule produces are reported as warnings before
/// scanning starts.
pub fn tokenize_with_handler<'a>(
    source: &'a str,
    config: &LexerConfig,
    handler: &Handler,
) -> Vec<Token<'a>> {
    let lexer = Lexer::with_config(source, config);
    drain(lexer, handler, |_| None)
}

/// Like [`tokenize_with_handler`], for a file from a
/// [`SourceMap`](idlc_util::SourceMap).
///
/// Spans carry the file's id, and each error diagnostic includes a snippet
/// of the offending line.
pub fn tokenize_file<'a>(
    file: &'a SourceFile,
    config: &LexerConfig,
    handler: &Handler,
) -> Vec<Token<'a>> {
    let lexer = Lexer::with_config(file.content(), config).in_file(file.id());
    debug!(file = file.name(), "lexing file");
    drain(lexer, handler, |err| snippet_for(file, err))
}

fn drain<'a>(
    lexer: Lexer<'a>,
    handler: &Handler,
    snippet: impl Fn(&LexError) -> Option<SourceSnippet>,
) -> Vec<Token<'a>> {
    for kind in lexer.unused_suppressions() {
        DiagnosticBuilder::warning(format!("suppressed kind `{kind}` is never produced"))
            .code(DiagnosticCode::W_UNUSED_SUPPRESSION)
            .emit(handler);
    }

    let mut tokens = Vec::new();
    let mut errors = 0usize;
    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => {
                errors += 1;
                let mut diagnostic = err.to_diagnostic();
                diagnostic.snippets.extend(snippet(&err));
                handler.emit_diagnostic(diagnostic);
            },
        }
    }

    debug!(tokens = tokens.len(), errors, "tokenized");
    tokens
}

fn snippet_for(file: &SourceFile, err: &LexError) -> Option<SourceSnippet> {
    let span = err.span();
    let line_number = span.line as usize;
    let line = file.line_at(line_number)?;

    // Only the part of the span on its first line is underlined.
    let text = file.extract_range(span.start, span.end).ok()?;
    let width = text.split('\n').next().map_or(0, |first| first.chars().count());
    let start_column = span.column as usize;

    Some(SourceSnippet::new(
        line,
        line_number,
        start_column,
        start_column + width,
        None::<String>,
    ))
}

static_assertions::assert_impl_all!(Token<'static>: Copy, Send, Sync);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);
