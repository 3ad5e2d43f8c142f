//! Property-based tests for the lexer.

use proptest::prelude::*;

use crate::token::keyword_from_ident;
use crate::{LexError, Lexer, LexerConfig, Token, TokenKind, Value};

fn lex_tokens(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).map(|t| t.expect("unexpected lex error")).collect()
}

fn newlines(text: &str) -> u32 {
    text.matches('\n').count() as u32
}

/// Whitespace, block comments, and newline-terminated line comments.
fn trivia() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t\r\n]{1,5}",
        "[^*]{0,30}".prop_map(|body| format!("/*{}*/", body)),
        "[^\n]{0,20}".prop_map(|body| format!("//{}\n", body)),
    ]
}

// ------------------------------------------------------------------------
// PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
// ------------------------------------------------------------------------

#[test]
fn test_property_trivia_only_input_yields_only_eof() {
    proptest!(|(pieces in prop::collection::vec(trivia(), 0..12))| {
        let source = pieces.concat();
        let mut lexer = Lexer::new(&source);

        let eof = lexer.next_token().unwrap();
        prop_assert!(eof.is_eof(), "got {} for {:?}", eof, source);
        prop_assert_eq!(eof.line(), 1 + newlines(&source));
        prop_assert!(lexer.next().is_none());
    });
}

#[test]
fn test_property_spans_reconstruct_source() {
    proptest!(|(source in "[ -~\t\n]{0,80}")| {
        let mut lexer = Lexer::with_config(&source, &LexerConfig::emit_comments());
        let mut covered = 0;

        loop {
            let span = match lexer.next_token() {
                Ok(token) if token.is_eof() => break,
                Ok(token) => {
                    prop_assert_eq!(token.text, &source[token.span.start..token.span.end]);
                    token.span
                },
                Err(err) => err.span(),
            };

            let gap = &source[covered..span.start];
            prop_assert!(gap.chars().all(crate::chars::is_whitespace), "gap {:?}", gap);
            prop_assert!(span.end > span.start);
            prop_assert_eq!(span.line, 1 + newlines(&source[..span.start]));
            covered = span.end;
        }

        prop_assert!(source[covered..].chars().all(crate::chars::is_whitespace));
        prop_assert_eq!(lexer.line(), 1 + newlines(&source));
    });
}

#[test]
fn test_property_suppressed_gaps_hold_only_trivia() {
    proptest!(|(source in "[ -~\t\n]{0,80}")| {
        let mut lexer = Lexer::new(&source);
        let mut covered = 0;
        let mut units = Vec::new();

        loop {
            let span = match lexer.next_token() {
                Ok(token) if token.is_eof() => break,
                Ok(token) => {
                    prop_assert_ne!(token.kind, TokenKind::Comment);
                    units.push((token.kind, token.span));
                    token.span
                },
                Err(err) => err.span(),
            };

            let gap = &source[covered..span.start];
            let gap_tokens: Vec<_> =
                Lexer::with_config(gap, &LexerConfig::emit_comments()).collect();
            prop_assert!(
                gap_tokens.iter().all(|t| matches!(t, Ok(t) if t.kind == TokenKind::Comment)),
                "gap {:?}",
                gap
            );
            prop_assert_eq!(span.line, 1 + newlines(&source[..span.start]));
            covered = span.end;
        }

        let rest: Vec<_> = Lexer::with_config(&source[covered..], &LexerConfig::emit_comments())
            .collect();
        prop_assert!(rest.iter().all(|t| matches!(t, Ok(t) if t.kind == TokenKind::Comment)));
        prop_assert_eq!(lexer.line(), 1 + newlines(&source));

        let unsuppressed: Vec<_> = Lexer::with_config(&source, &LexerConfig::emit_comments())
            .filter_map(Result::ok)
            .filter(|t| t.kind != TokenKind::Comment)
            .map(|t| (t.kind, t.span))
            .collect();
        prop_assert_eq!(units, unsuppressed);
    });
}

#[test]
fn test_suppressed_comments_between_tokens() {
    let source = "interface /* c\n */ A // x\n  // y\n{...}";
    let tokens = lex_tokens(source);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["interface", "A", "{", "...", "}"]);
    assert_eq!(tokens[1].line(), 2);
    assert_eq!(tokens[2].line(), 4);
    assert_eq!(&source[tokens[0].span.end..tokens[1].span.start], " /* c\n */ ");
}

#[test]
fn test_property_block_comment_content_is_invisible() {
    proptest!(|(body in "[^*]{0,60}")| {
        let source = format!("/*{}*/ x", body);
        let tokens = lex_tokens(&source);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].text, "x");
        prop_assert_eq!(tokens[0].line(), 1 + newlines(&body));
    });
}

#[test]
fn test_property_line_comment_run_is_one_unit() {
    proptest!(|(lines in prop::collection::vec(("[ \t]{0,3}", "[^\n]{0,10}"), 1..6))| {
        let run = lines
            .iter()
            .map(|(indent, text)| format!("{}//{}", indent, text))
            .collect::<Vec<_>>()
            .join("\n");
        let source = format!("{}\nfoo", run);

        let mut lexer = Lexer::with_config(&source, &LexerConfig::emit_comments());
        let comment = lexer.next_token().unwrap();
        prop_assert_eq!(comment.kind, TokenKind::Comment);
        prop_assert_eq!(newlines(comment.text), lines.len() as u32 - 1);

        let foo = lexer.next_token().unwrap();
        prop_assert_eq!(foo.text, "foo");
        prop_assert_eq!(foo.line(), lines.len() as u32 + 1);

        let suppressed = lex_tokens(&source);
        prop_assert_eq!(suppressed.len(), 1);
        prop_assert_eq!(suppressed[0].line(), foo.line());
    });
}

#[test]
fn test_property_words_are_keywords_or_identifiers() {
    proptest!(|(input in "_?[A-Za-z][A-Za-z0-9_]{0,12}")| {
        let tokens = lex_tokens(&input);
        prop_assert_eq!(tokens.len(), 1);

        match keyword_from_ident(&input) {
            Some(keyword) => {
                prop_assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword));
            },
            None => {
                prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
                let expected = input.strip_prefix('_').unwrap_or(&input);
                prop_assert_eq!(tokens[0].value, Value::Ident(expected));
            },
        }
    });
}

#[test]
fn test_property_decimal_integers_decode() {
    proptest!(|(value in any::<i64>())| {
        let source = value.to_string();
        let tokens = lex_tokens(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].value, Value::Integer(i128::from(value)));
    });
}

#[test]
fn test_property_hex_integers_decode() {
    proptest!(|(value in any::<u64>())| {
        let source = format!("0x{:X}", value);
        let tokens = lex_tokens(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].value, Value::Integer(i128::from(value)));
    });
}

#[test]
fn test_property_floats_decode() {
    let finite = proptest::num::f64::NORMAL | proptest::num::f64::ZERO;

    proptest!(|(value in finite)| {
        let source = format!("{:?}", value);
        let tokens = lex_tokens(&source);
        prop_assert_eq!(tokens.len(), 1, "{}", source);
        prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        prop_assert_eq!(tokens[0].value, Value::Float(value));
    });
}

#[test]
fn test_property_string_literals() {
    proptest!(|(body in "[^\"]{0,60}")| {
        let source = format!("\"{}\";", body);
        let tokens = lex_tokens(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].value, Value::Str(body.as_str()));
        prop_assert_eq!(tokens[1].line(), 1 + newlines(&body));
    });
}

#[test]
fn test_property_unterminated_block_comment_never_ends_silently() {
    proptest!(|(body in "[^*]{0,40}")| {
        let source = format!("/*{}", body);
        let mut lexer = Lexer::new(&source);
        let is_unterminated = matches!(
            lexer.next_token(),
            Err(LexError::UnterminatedBlockComment { .. })
        );
        prop_assert!(is_unterminated);
        prop_assert!(lexer.next_token().unwrap().is_eof());
    });
}
