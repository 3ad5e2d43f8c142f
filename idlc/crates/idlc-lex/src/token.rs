//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the raw lexeme it was scanned
//! from, the decoded literal [`Value`], and its [`Span`].
//!
//! Kind names follow the conventional Web IDL lexer token types: literal
//! kinds are lowercase (`integer`, `float`, `string`, `identifier`),
//! keywords are their spelling in uppercase (`INTERFACE`, `DOMSTRING`),
//! punctuation is the symbol itself (`;`, `*`), and the remaining
//! multi-character kinds are uppercase words (`COMMENT`, `ELLIPSIS`).

use std::fmt;
use std::str::FromStr;

use idlc_util::Span;
use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Web IDL keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Keyword {
    Any,
    Attribute,
    Boolean,
    Byte,
    ByteString,
    Callback,
    Const,
    Creator,
    Date,
    Deleter,
    Dictionary,
    DomString,
    Double,
    Enum,
    Exception,
    False,
    Float,
    Getter,
    Implements,
    Infinity,
    Inherit,
    Interface,
    Iterable,
    LegacyCaller,
    Long,
    NaN,
    Namespace,
    Null,
    Object,
    Octet,
    Optional,
    Or,
    Partial,
    Promise,
    ReadOnly,
    Record,
    RegExp,
    Sequence,
    Serializer,
    Setter,
    Short,
    Static,
    Stringifier,
    True,
    Typedef,
    Unrestricted,
    Unsigned,
    UsvString,
    Void,
}

impl Keyword {
    /// Every keyword, in the order the default rule table declares them.
    pub const ALL: [Keyword; 49] = [
        Keyword::Any,
        Keyword::Attribute,
        Keyword::Boolean,
        Keyword::Byte,
        Keyword::ByteString,
        Keyword::Callback,
        Keyword::Const,
        Keyword::Creator,
        Keyword::Date,
        Keyword::Deleter,
        Keyword::Dictionary,
        Keyword::DomString,
        Keyword::Double,
        Keyword::Enum,
        Keyword::Exception,
        Keyword::False,
        Keyword::Float,
        Keyword::Getter,
        Keyword::Implements,
        Keyword::Infinity,
        Keyword::Inherit,
        Keyword::Interface,
        Keyword::Iterable,
        Keyword::LegacyCaller,
        Keyword::Long,
        Keyword::NaN,
        Keyword::Namespace,
        Keyword::Null,
        Keyword::Object,
        Keyword::Octet,
        Keyword::Optional,
        Keyword::Or,
        Keyword::Partial,
        Keyword::Promise,
        Keyword::ReadOnly,
        Keyword::Record,
        Keyword::RegExp,
        Keyword::Sequence,
        Keyword::Serializer,
        Keyword::Setter,
        Keyword::Short,
        Keyword::Static,
        Keyword::Stringifier,
        Keyword::True,
        Keyword::Typedef,
        Keyword::Unrestricted,
        Keyword::Unsigned,
        Keyword::UsvString,
        Keyword::Void,
    ];

    /// The keyword as written in IDL source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Any => "any",
            Keyword::Attribute => "attribute",
            Keyword::Boolean => "boolean",
            Keyword::Byte => "byte",
            Keyword::ByteString => "ByteString",
            Keyword::Callback => "callback",
            Keyword::Const => "const",
            Keyword::Creator => "creator",
            Keyword::Date => "Date",
            Keyword::Deleter => "deleter",
            Keyword::Dictionary => "dictionary",
            Keyword::DomString => "DOMString",
            Keyword::Double => "double",
            Keyword::Enum => "enum",
            Keyword::Exception => "exception",
            Keyword::False => "false",
            Keyword::Float => "float",
            Keyword::Getter => "getter",
            Keyword::Implements => "implements",
            Keyword::Infinity => "Infinity",
            Keyword::Inherit => "inherit",
            Keyword::Interface => "interface",
            Keyword::Iterable => "iterable",
            Keyword::LegacyCaller => "legacycaller",
            Keyword::Long => "long",
            Keyword::NaN => "NaN",
            Keyword::Namespace => "namespace",
            Keyword::Null => "null",
            Keyword::Object => "object",
            Keyword::Octet => "octet",
            Keyword::Optional => "optional",
            Keyword::Or => "or",
            Keyword::Partial => "partial",
            Keyword::Promise => "Promise",
            Keyword::ReadOnly => "readonly",
            Keyword::Record => "record",
            Keyword::RegExp => "RegExp",
            Keyword::Sequence => "sequence",
            Keyword::Serializer => "serializer",
            Keyword::Setter => "setter",
            Keyword::Short => "short",
            Keyword::Static => "static",
            Keyword::Stringifier => "stringifier",
            Keyword::True => "true",
            Keyword::Typedef => "typedef",
            Keyword::Unrestricted => "unrestricted",
            Keyword::Unsigned => "unsigned",
            Keyword::UsvString => "USVString",
            Keyword::Void => "void",
        }
    }
}

/// Looks up the keyword spelled exactly `ident`.
///
/// # Example
///
/// ```
/// use idlc_lex::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("DOMString"), Some(Keyword::DomString));
/// assert_eq!(keyword_from_ident("domstring"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    Keyword::ALL.into_iter().find(|k| k.as_str() == ident)
}

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TokenKind {
    /// `/* ... */` or a run of `//` lines
    Comment,
    /// Decimal, hexadecimal or octal integer literal
    Integer,
    /// Floating point literal
    Float,
    /// Double-quoted string literal
    String,
    /// Identifier
    Identifier,
    /// Reserved word
    Keyword(Keyword),
    /// `...`
    Ellipsis,
    /// `-Infinity`
    NegativeInfinity,
    /// `*`
    Star,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `~`
    Tilde,
    /// `|`
    Pipe,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `&`
    Amp,
    /// `^`
    Caret,
    /// `?`
    Question,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Single-character punctuation, in rule declaration order.
    pub const PUNCTUATION: [(&'static str, TokenKind); 22] = [
        ("*", TokenKind::Star),
        (".", TokenKind::Dot),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
        ("=", TokenKind::Eq),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("/", TokenKind::Slash),
        ("~", TokenKind::Tilde),
        ("|", TokenKind::Pipe),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("&", TokenKind::Amp),
        ("^", TokenKind::Caret),
        ("?", TokenKind::Question),
    ];

    /// Kinds with a fixed name (everything except keywords).
    const NAMED: [(&'static str, TokenKind); 8] = [
        ("COMMENT", TokenKind::Comment),
        ("integer", TokenKind::Integer),
        ("float", TokenKind::Float),
        ("string", TokenKind::String),
        ("identifier", TokenKind::Identifier),
        ("ELLIPSIS", TokenKind::Ellipsis),
        ("NEGATIVE_INFINITY", TokenKind::NegativeInfinity),
        ("EOF", TokenKind::Eof),
    ];

    /// Returns true for keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Returns true for kinds that carry a decoded [`Value`].
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Identifier
        )
    }

    /// Parses a kind from its token type name.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::{Keyword, TokenKind};
    ///
    /// assert_eq!(TokenKind::from_name("COMMENT"), Some(TokenKind::Comment));
    /// assert_eq!(TokenKind::from_name("float"), Some(TokenKind::Float));
    /// assert_eq!(
    ///     TokenKind::from_name("FLOAT"),
    ///     Some(TokenKind::Keyword(Keyword::Float))
    /// );
    /// assert_eq!(TokenKind::from_name(";"), Some(TokenKind::Semicolon));
    /// assert_eq!(TokenKind::from_name("Comment"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        if let Some(&(_, kind)) = Self::NAMED.iter().find(|(n, _)| *n == name) {
            return Some(kind);
        }
        if let Some(&(_, kind)) = Self::PUNCTUATION.iter().find(|(p, _)| *p == name) {
            return Some(kind);
        }
        if name.is_empty() || name.bytes().any(|b| b.is_ascii_lowercase()) {
            return None;
        }
        Keyword::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(name))
            .map(TokenKind::Keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(k) => {
                for c in k.as_str().chars() {
                    write!(f, "{}", c.to_ascii_uppercase())?;
                }
                Ok(())
            },
            kind => {
                let name = Self::NAMED
                    .iter()
                    .chain(Self::PUNCTUATION.iter())
                    .find(|(_, k)| k == kind)
                    .map_or("?", |(n, _)| *n);
                f.write_str(name)
            },
        }
    }
}

impl FromStr for TokenKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::from_name(s).ok_or_else(|| ParseKindError(s.to_string()))
    }
}

impl TryFrom<String> for TokenKind {
    type Error = ParseKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.to_string()
    }
}

/// The decoded payload of a literal token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    /// Tokens without a payload (keywords, punctuation, comments, end of input)
    None,
    /// Integer literal; wide enough for every `long long` and
    /// `unsigned long long` value
    Integer(i128),
    /// Float literal
    Float(f64),
    /// String literal body, without the quotes
    Str(&'a str),
    /// Identifier name, with the escaping underscore removed
    Ident(&'a str),
}

/// A token scanned from IDL source.
///
/// `text` borrows from the source buffer, so tokens are `Copy` and cost
/// nothing to hand to a parser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Raw lexeme, exactly as it appears in the source
    pub text: &'a str,
    /// Decoded literal value
    pub value: Value<'a>,
    /// Location of the lexeme
    pub span: Span,
}

impl<'a> Token<'a> {
    /// 1-based line on which the token starts.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.text, self.span.line)
    }
}
