//! Edge case tests for idlc-lex

#[cfg(test)]
mod tests {
    use crate::{Keyword, LexError, Lexer, LexerConfig, Token, TokenKind, Value};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).map(|t| t.expect("unexpected lex error")).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        let eof = Lexer::new("").next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.line(), 1);
    }

    #[test]
    fn test_edge_whitespace_only() {
        let mut lexer = Lexer::new(" \t\r\n\n  ");
        let eof = lexer.next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.line(), 3);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("attribute long {};", name);
        let t = lex_all(&source);
        assert_eq!(t[2].value, Value::Ident(name.as_str()));
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        assert_eq!(
            kinds("DOMString domstring Interface"),
            vec![
                TokenKind::Keyword(Keyword::DomString),
                TokenKind::Identifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_every_keyword_lexes_as_itself() {
        for keyword in Keyword::ALL {
            let t = lex_all(keyword.as_str());
            assert_eq!(t.len(), 1, "{:?}", keyword);
            assert_eq!(t[0].kind, TokenKind::Keyword(keyword));
        }
    }

    #[test]
    fn test_edge_escaped_keyword() {
        let t = lex_all("_interface _Infinity");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].value, Value::Ident("interface"));
        assert_eq!(t[0].text, "_interface");
        assert_eq!(t[1].value, Value::Ident("Infinity"));
    }

    #[test]
    fn test_edge_negative_infinity() {
        assert_eq!(
            kinds("-Infinity - Infinity -Infinityx"),
            vec![
                TokenKind::NegativeInfinity,
                TokenKind::Minus,
                TokenKind::Keyword(Keyword::Infinity),
                TokenKind::NegativeInfinity,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_dots() {
        assert_eq!(
            kinds("... .... 1..2"),
            vec![
                TokenKind::Ellipsis,
                TokenKind::Ellipsis,
                TokenKind::Dot,
                TokenKind::Float,
                TokenKind::Float,
            ]
        );
    }

    #[test]
    fn test_edge_octal_and_hex_boundaries() {
        let t = lex_all("0 07 08 0x 0xg");
        let texts: Vec<&str> = t.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["0", "07", "0", "8", "0", "x", "0", "xg"]);
        assert_eq!(t[1].value, Value::Integer(7));
    }

    #[test]
    fn test_edge_unsigned_long_long_max() {
        let t = lex_all("18446744073709551615 -9223372036854775808");
        assert_eq!(t[0].value, Value::Integer(u64::MAX as i128));
        assert_eq!(t[1].value, Value::Integer(i64::MIN as i128));
    }

    #[test]
    fn test_edge_float_overflow() {
        let mut lexer = Lexer::new("1e400");
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::NumberOutOfRange { .. })
        ));
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_edge_string_with_comment_markers() {
        let t = lex_all(r#""/* not a comment */" "// nor this""#);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].value, Value::Str("/* not a comment */"));
        assert_eq!(t[1].value, Value::Str("// nor this"));
    }

    #[test]
    fn test_edge_multiline_string_advances_line() {
        let t = lex_all("\"a\nb\" x");
        assert_eq!(t[0].line(), 1);
        assert_eq!(t[1].line(), 2);
    }

    #[test]
    fn test_edge_unterminated_string() {
        let mut lexer = Lexer::new("x \"abc\ndef");
        assert_eq!(lexer.next_token().unwrap().text, "x");
        match lexer.next_token() {
            Err(LexError::UnterminatedString { span }) => {
                assert_eq!(span.line, 1);
                assert_eq!(span.start, 2);
                assert_eq!(span.end, 10);
            },
            other => panic!("unexpected {:?}", other),
        }
        let eof = lexer.next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.line(), 2);
    }

    #[test]
    fn test_edge_comment_directly_after_token() {
        let t = lex_all("a/*x*/b//y\nc");
        let texts: Vec<&str> = t.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(t[2].line(), 2);
    }

    #[test]
    fn test_edge_slash_star_slash_is_unterminated() {
        let (tokens, errors) = crate::tokenize("a /*/ b");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(errors[..], [LexError::UnterminatedBlockComment { .. }]));
    }

    #[test]
    fn test_edge_line_comment_run_counts_every_line() {
        let t = lex_all("// one\n  // two\n\t// three\nx");
        assert_eq!(t[0].line(), 4);
    }

    #[test]
    fn test_edge_line_comment_at_end_without_newline() {
        let mut lexer = Lexer::new("x // trailing");
        lexer.next_token().unwrap();
        let eof = lexer.next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.line(), 1);
    }

    #[test]
    fn test_edge_emitted_comment_runs() {
        let mut lexer =
            Lexer::with_config("// a\n// b\n\n// c\n", &LexerConfig::emit_comments());
        let first = lexer.next_token().unwrap();
        assert_eq!(first.text, "// a\n// b");
        let second = lexer.next_token().unwrap();
        assert_eq!(second.text, "// c");
        assert_eq!(second.line(), 4);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("interface A {\r\n  attribute long b;\r\n};\r\n");
        assert_eq!(t.last().unwrap().line(), 3);
        assert!(t.iter().all(|t| !t.text.contains('\r')));
    }

    #[test]
    fn test_edge_columns_count_characters() {
        let t = lex_all("/* é */ x");
        assert_eq!(t[0].span.column, 9);
        assert_eq!(t[0].span.start, 9);
    }

    #[test]
    fn test_edge_every_punctuation() {
        for (text, kind) in TokenKind::PUNCTUATION {
            let t = lex_all(text);
            assert_eq!(t.len(), 1, "{text}");
            assert_eq!(t[0].kind, kind);
        }
    }

    #[test]
    fn test_edge_nul_byte_is_illegal() {
        let mut lexer = Lexer::new("a\0b");
        lexer.next_token().unwrap();
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::IllegalCharacter { ch: '\0', .. })
        ));
        assert_eq!(lexer.next_token().unwrap().text, "b");
    }
}
