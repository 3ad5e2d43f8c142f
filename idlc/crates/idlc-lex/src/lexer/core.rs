//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its scanning loop.

use std::iter::FusedIterator;
use std::sync::Arc;

use idlc_util::{FileId, FxHashSet, Span};
use tracing::trace;

use crate::chars::is_whitespace;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::lexer::identifier::identifier_name;
use crate::lexer::number::{parse_float, parse_integer};
use crate::lexer::string::string_body;
use crate::rules::RuleTable;
use crate::token::{Token, TokenKind, Value};

/// Lexer for Web IDL.
///
/// The lexer turns a borrowed source buffer into a stream of tokens. Each
/// call to [`next_token`](Lexer::next_token) skips whitespace, picks the
/// longest match from the rule table, and returns it, looping internally
/// over matches whose kind is suppressed. Line numbers count every `\n`
/// consumed, including those inside suppressed comments.
///
/// # Example
///
/// ```
/// use idlc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("// hello\nfoo;");
///
/// let foo = lexer.next_token().unwrap();
/// assert_eq!((foo.kind, foo.text, foo.line()), (TokenKind::Identifier, "foo", 2));
///
/// let semi = lexer.next_token().unwrap();
/// assert_eq!((semi.kind, semi.line()), (TokenKind::Semicolon, 2));
///
/// assert!(lexer.next_token().unwrap().is_eof());
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Rules in declaration order.
    rules: Arc<RuleTable>,

    /// Kinds that are matched but never returned.
    suppressed: FxHashSet<TokenKind>,

    /// Whether identifier values drop their escaping underscore.
    strip_identifier_underscore: bool,

    /// File id stamped on every span.
    file_id: FileId,

    /// Whether the BOM (Byte Order Mark) has been checked.
    bom_checked: bool,

    /// Set once the end-of-input token has been produced.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the Web IDL rules and the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    /// Creates a lexer with the Web IDL rules and `config`.
    pub fn with_config(source: &'a str, config: &LexerConfig) -> Self {
        Self::with_shared_rules(source, RuleTable::shared_webidl(), config)
    }

    /// Creates a lexer over a custom rule table.
    pub fn with_rules(source: &'a str, rules: RuleTable, config: &LexerConfig) -> Self {
        Self::with_shared_rules(source, Arc::new(rules), config)
    }

    /// Creates a lexer over a rule table shared with other lexers.
    pub fn with_shared_rules(source: &'a str, rules: Arc<RuleTable>, config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            rules,
            suppressed: config.suppressed.iter().copied().collect(),
            strip_identifier_underscore: config.strip_identifier_underscore,
            file_id: FileId::DUMMY,
            bom_checked: false,
            exhausted: false,
        }
    }

    /// Stamps every span this lexer produces with `file_id`.
    pub fn in_file(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Replaces the suppressed kind set.
    ///
    /// Only tokens scanned after the call are affected.
    pub fn set_suppressed_kinds(&mut self, kinds: impl IntoIterator<Item = TokenKind>) {
        self.suppressed = kinds.into_iter().collect();
    }

    /// Returns true if tokens of `kind` are skipped.
    pub fn is_suppressed(&self, kind: TokenKind) -> bool {
        self.suppressed.contains(&kind)
    }

    /// Kinds this lexer can return: every rule kind that is not suppressed,
    /// in declaration order.
    pub fn emitted_kinds(&self) -> Vec<TokenKind> {
        self.rules
            .kinds()
            .into_iter()
            .filter(|kind| !self.suppressed.contains(kind))
            .collect()
    }

    /// Suppressed kinds that no rule produces, sorted.
    ///
    /// A non-empty result usually means a misspelt configuration.
    pub fn unused_suppressions(&self) -> Vec<TokenKind> {
        let produced = self.rules.kinds();
        let mut unused: Vec<TokenKind> = self
            .suppressed
            .iter()
            .copied()
            .filter(|kind| !produced.contains(kind))
            .collect();
        unused.sort();
        unused
    }

    /// Returns the next token.
    ///
    /// At end of input this returns an [`Eof`](TokenKind::Eof) token, and
    /// keeps returning it on every further call. Errors are resumable: the
    /// offending text has been consumed, so calling again continues after
    /// it.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            self.skip_whitespace();

            let start = self.cursor.position();
            let line = self.cursor.line();
            let column = self.cursor.column();

            if self.cursor.is_at_end() {
                self.exhausted = true;
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: "",
                    value: Value::None,
                    span: self.span(start, line, column),
                });
            }

            let Some(matched) = self.rules.longest_match(self.cursor.remaining()) else {
                let ch = self.cursor.current_char();
                self.cursor.advance();
                return Err(LexError::IllegalCharacter {
                    ch,
                    span: self.span(start, line, column),
                });
            };

            self.cursor.advance_bytes(matched.len);
            let text = self.cursor.slice_from(start);
            let span = self.span(start, line, column);

            if !matched.terminated {
                return Err(unterminated(matched.kind, span));
            }

            if self.suppressed.contains(&matched.kind) {
                trace!(
                    kind = %matched.kind,
                    line,
                    len = matched.len,
                    newlines = self.cursor.line() - line,
                    "suppressed"
                );
                continue;
            }

            let value = self.decode(matched.kind, text, span)?;
            trace!(kind = %matched.kind, line, len = matched.len, "token");

            return Ok(Token {
                kind: matched.kind,
                text,
                value,
                span,
            });
        }
    }

    fn skip_whitespace(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.match_char('\u{FEFF}');
        }
        self.cursor.eat_while(is_whitespace);
    }

    fn span(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start, self.cursor.position(), line, column).in_file(self.file_id)
    }

    fn decode(&self, kind: TokenKind, text: &'a str, span: Span) -> Result<Value<'a>, LexError> {
        let out_of_range = || LexError::NumberOutOfRange {
            text: text.to_string(),
            span,
        };

        Ok(match kind {
            TokenKind::Integer => Value::Integer(parse_integer(text).ok_or_else(out_of_range)?),
            TokenKind::Float => Value::Float(parse_float(text).ok_or_else(out_of_range)?),
            TokenKind::String => Value::Str(string_body(text)),
            TokenKind::Identifier => {
                Value::Ident(identifier_name(text, self.strip_identifier_underscore))
            },
            _ => Value::None,
        })
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the end-of-input token has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The source buffer being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

fn unterminated(kind: TokenKind, span: Span) -> LexError {
    match kind {
        TokenKind::Comment => LexError::UnterminatedBlockComment { span },
        TokenKind::String => LexError::UnterminatedString { span },
        kind => LexError::Unterminated { kind, span },
    }
}

/// Yields tokens until the end of input; the [`Eof`](TokenKind::Eof) token
/// itself is not yielded.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

impl FusedIterator for Lexer<'_> {}

static_assertions::assert_impl_all!(Lexer<'static>: Send, Sync, Clone);
