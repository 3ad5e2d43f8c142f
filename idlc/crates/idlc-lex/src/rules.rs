//! The ordered rule table driving longest-match scanning.
//!
//! A [`RuleTable`] is a list of `(kind, pattern)` pairs. At each position
//! the lexer asks every rule how much of the remaining input it matches and
//! takes the longest match; on equal lengths the rule declared first wins.
//! That tie-break is what lets keyword literals, declared before the
//! identifier rule, beat identifiers of the same length.
//!
//! Custom tables let embedders replace or extend the Web IDL rules without
//! touching the lexer itself:
//!
//! ```
//! use idlc_lex::{Lexer, LexerConfig, Rule, RuleTable, Scan, TokenKind};
//!
//! fn digits(rest: &str) -> Scan {
//!     match rest.bytes().take_while(u8::is_ascii_digit).count() {
//!         0 => Scan::Miss,
//!         n => Scan::Hit(n),
//!     }
//! }
//!
//! let rules = RuleTable::new()
//!     .with(Rule::scanner(TokenKind::Integer, digits))
//!     .with(Rule::literal(TokenKind::Comma, ","));
//! let lexer = Lexer::with_rules("1,22", rules, &LexerConfig::default());
//!
//! let texts: Vec<&str> = lexer.map(|t| t.unwrap().text).collect();
//! assert_eq!(texts, ["1", ",", "22"]);
//! ```

use std::sync::{Arc, OnceLock};

use crate::lexer::{scan_comment, scan_float, scan_identifier, scan_integer, scan_string};
use crate::token::{Keyword, TokenKind};

/// Outcome of running one pattern at the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// The pattern does not match here.
    Miss,
    /// The pattern matches this many bytes.
    Hit(usize),
    /// The pattern opened a construct that runs off the end of the input;
    /// the length covers everything consumed.
    Unterminated(usize),
}

impl Scan {
    /// Matched length in bytes, terminated or not.
    #[inline]
    pub fn len(self) -> usize {
        match self {
            Scan::Miss => 0,
            Scan::Hit(n) | Scan::Unterminated(n) => n,
        }
    }

    /// Returns true if nothing was matched.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// How a rule recognises its lexemes.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    /// Exact text.
    Literal(&'static str),
    /// A hand-written scanner over the remaining input.
    Scanner(fn(&str) -> Scan),
}

impl Pattern {
    /// Runs the pattern against `rest`, the input from the current position.
    #[inline]
    pub fn scan(&self, rest: &str) -> Scan {
        match self {
            Pattern::Literal(text) if rest.starts_with(*text) => Scan::Hit(text.len()),
            Pattern::Literal(_) => Scan::Miss,
            Pattern::Scanner(scanner) => scanner(rest),
        }
    }
}

/// A single `(kind, pattern)` rule.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Kind of the tokens this rule produces
    pub kind: TokenKind,
    /// What the rule matches
    pub pattern: Pattern,
}

impl Rule {
    /// A rule matching exactly `text`.
    pub const fn literal(kind: TokenKind, text: &'static str) -> Self {
        Self {
            kind,
            pattern: Pattern::Literal(text),
        }
    }

    /// A rule backed by a scanner function.
    pub const fn scanner(kind: TokenKind, scanner: fn(&str) -> Scan) -> Self {
        Self {
            kind,
            pattern: Pattern::Scanner(scanner),
        }
    }
}

/// The winner of a longest-match round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matched {
    /// Kind of the winning rule
    pub kind: TokenKind,
    /// Matched length in bytes
    pub len: usize,
    /// False if the winning rule ran off the end of the input
    pub terminated: bool,
}

/// An ordered list of rules.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The Web IDL rules, in declaration order: comments, floats,
    /// integers, strings, `...`, `-Infinity`, keywords, identifiers, then
    /// single-character punctuation.
    pub fn webidl() -> Self {
        let mut table = Self::new()
            .with(Rule::scanner(TokenKind::Comment, scan_comment))
            .with(Rule::scanner(TokenKind::Float, scan_float))
            .with(Rule::scanner(TokenKind::Integer, scan_integer))
            .with(Rule::scanner(TokenKind::String, scan_string))
            .with(Rule::literal(TokenKind::Ellipsis, "..."))
            .with(Rule::literal(TokenKind::NegativeInfinity, "-Infinity"));

        for keyword in Keyword::ALL {
            table.push(Rule::literal(TokenKind::Keyword(keyword), keyword.as_str()));
        }
        table.push(Rule::scanner(TokenKind::Identifier, scan_identifier));
        for (text, kind) in TokenKind::PUNCTUATION {
            table.push(Rule::literal(kind, text));
        }
        table
    }

    /// Shared instance of [`RuleTable::webidl`], built once per process.
    pub fn shared_webidl() -> Arc<RuleTable> {
        static WEBIDL: OnceLock<Arc<RuleTable>> = OnceLock::new();
        Arc::clone(WEBIDL.get_or_init(|| Arc::new(RuleTable::webidl())))
    }

    /// Appends a rule; it loses ties against every rule already present.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every kind some rule can produce, first declaration first.
    pub fn kinds(&self) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !kinds.contains(&rule.kind) {
                kinds.push(rule.kind);
            }
        }
        kinds
    }

    /// Finds the longest match at the start of `rest`.
    ///
    /// Only a strictly longer match displaces the current best, so the
    /// earliest declared rule wins ties. Empty matches never win.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::{Keyword, RuleTable, TokenKind};
    ///
    /// let table = RuleTable::webidl();
    /// let m = table.longest_match("long x").unwrap();
    /// assert_eq!(m.kind, TokenKind::Keyword(Keyword::Long));
    ///
    /// let m = table.longest_match("longer").unwrap();
    /// assert_eq!((m.kind, m.len), (TokenKind::Identifier, 6));
    /// ```
    pub fn longest_match(&self, rest: &str) -> Option<Matched> {
        let mut best: Option<Matched> = None;

        for rule in &self.rules {
            let scan = rule.pattern.scan(rest);
            if scan.is_empty() {
                continue;
            }
            // Custom scanners may overshoot; never split a character.
            let len = scan.len();
            if len > rest.len() || !rest.is_char_boundary(len) {
                continue;
            }
            if best.map_or(true, |b| len > b.len) {
                best = Some(Matched {
                    kind: rule.kind,
                    len,
                    terminated: matches!(scan, Scan::Hit(_)),
                });
            }
        }

        best
    }
}
