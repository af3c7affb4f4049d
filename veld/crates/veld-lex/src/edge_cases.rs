//! Edge case tests for veld-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with, LexerConfig, TokenKind};
    use proptest::prelude::*;
    use veld_util::{Handler, Span};

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn single(source: &str) -> (TokenKind, &str) {
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 1, "{source:?} gave {tokens:?}");
        tokens[0]
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_longest_match_equal() {
        assert_eq!(single("=="), (TokenKind::Equal, "=="));
    }

    #[test]
    fn test_edge_keyword_for() {
        assert_eq!(single("for"), (TokenKind::For, "for"));
    }

    #[test]
    fn test_edge_float_and_integer() {
        assert_eq!(single("12.5"), (TokenKind::Float, "12.5"));
        assert_eq!(single("12"), (TokenKind::Integer, "12"));
    }

    #[test]
    fn test_edge_custom_type_vs_identifier() {
        assert_eq!(single("Point"), (TokenKind::Type, "Point"));
        assert_eq!(single("point"), (TokenKind::Identifier, "point"));
    }

    #[test]
    fn test_edge_comment_swallows_keywords() {
        assert_eq!(
            single("-- ignore this, fn true"),
            (TokenKind::LineComment, "-- ignore this, fn true")
        );
    }

    #[test]
    fn test_edge_comment_is_trimmed() {
        assert_eq!(single("   -- note   \t"), (TokenKind::LineComment, "-- note"));
    }

    #[test]
    fn test_edge_string_keeps_quotes() {
        assert_eq!(single("\"hello world\""), (TokenKind::String, "\"hello world\""));
    }

    #[test]
    fn test_edge_string_keeps_inner_spacing() {
        assert_eq!(single("'  a  '"), (TokenKind::String, "'  a  '"));
    }

    #[test]
    fn test_edge_decorator() {
        assert_eq!(single("@override"), (TokenKind::Decorator, "@override"));
    }

    #[test]
    fn test_edge_blank_lines() {
        assert!(lex_all("\n\n   \n\t\t\n\r\n").is_empty());
    }

    #[test]
    fn test_edge_no_space_between_tokens() {
        assert_eq!(
            lex_all("x:=y+1"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Assign, ":="),
                (TokenKind::Identifier, "y"),
                (TokenKind::Plus, "+"),
                (TokenKind::Integer, "1"),
            ]
        );
    }

    fn lex_whole_words(source: &str) -> Vec<(TokenKind, &str)> {
        let config = LexerConfig {
            word_boundaries: true,
            ..LexerConfig::default()
        };
        let mut handler = Handler::new();
        tokenize_with(source, &config, &mut handler)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_edge_keyword_prefix_splits() {
        assert_eq!(
            lex_all("format"),
            vec![(TokenKind::For, "for"), (TokenKind::Identifier, "mat")]
        );
        assert_eq!(
            lex_all("for_each"),
            vec![(TokenKind::For, "for"), (TokenKind::Identifier, "_each")]
        );
        assert_eq!(
            lex_all("letter"),
            vec![(TokenKind::Let, "let"), (TokenKind::Identifier, "ter")]
        );
        assert_eq!(
            lex_all("nil_value"),
            vec![(TokenKind::Nil, "nil"), (TokenKind::Identifier, "_value")]
        );
    }

    #[test]
    fn test_edge_type_prefix_splits() {
        assert_eq!(
            lex_all("integer"),
            vec![(TokenKind::IntType, "int"), (TokenKind::Identifier, "eger")]
        );
        assert_eq!(
            lex_all("u8x"),
            vec![(TokenKind::U8Type, "u8"), (TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_edge_word_operator_prefix_splits() {
        assert_eq!(
            lex_all("order"),
            vec![(TokenKind::Or, "or"), (TokenKind::Identifier, "der")]
        );
        assert_eq!(
            lex_all("android"),
            vec![(TokenKind::And, "and"), (TokenKind::Identifier, "roid")]
        );
    }

    #[test]
    fn test_edge_word_boundaries_keep_names_whole() {
        for name in ["format", "for_each", "letter", "iffy", "nil_value", "integer", "u8x", "order", "android", "nothing"] {
            assert_eq!(lex_whole_words(name), vec![(TokenKind::Identifier, name)]);
        }
        assert_eq!(
            lex_whole_words("for x in xs"),
            vec![
                (TokenKind::For, "for"),
                (TokenKind::Identifier, "x"),
                (TokenKind::In, "in"),
                (TokenKind::Identifier, "xs"),
            ]
        );
    }

    #[test]
    fn test_edge_getter_before_get() {
        assert_eq!(single("getter"), (TokenKind::Getter, "getter"));
        assert_eq!(single("get"), (TokenKind::Get, "get"));
    }

    #[test]
    fn test_edge_double_slash() {
        assert_eq!(
            lex_all("a // b / c"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::IntDivide, "//"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Divide, "/"),
                (TokenKind::Identifier, "c"),
            ]
        );
    }

    #[test]
    fn test_edge_minus_vs_comment() {
        assert_eq!(
            lex_all("a - -b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Minus, "-"),
                (TokenKind::Minus, "-"),
                (TokenKind::Identifier, "b"),
            ]
        );
        assert_eq!(lex_all("a --b")[1], (TokenKind::LineComment, "--b"));
    }

    #[test]
    fn test_edge_range_after_integer() {
        assert_eq!(
            lex_all("1..5"),
            vec![
                (TokenKind::Integer, "1"),
                (TokenKind::Range, ".."),
                (TokenKind::Integer, "5"),
            ]
        );
    }

    #[test]
    fn test_edge_method_call_on_float() {
        assert_eq!(
            lex_all("1.5.floor"),
            vec![
                (TokenKind::Float, "1.5"),
                (TokenKind::Period, "."),
                (TokenKind::Identifier, "floor"),
            ]
        );
    }

    #[test]
    fn test_edge_number_then_name() {
        assert_eq!(
            lex_all("12abc"),
            vec![(TokenKind::Integer, "12"), (TokenKind::Identifier, "abc")]
        );
    }

    #[test]
    fn test_edge_string_does_not_cross_lines() {
        let mut handler = Handler::new();
        let tokens = tokenize_with("'a\nb'", &LexerConfig::default(), &mut handler).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].kind, tokens[0].text), (TokenKind::Identifier, "b"));
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_edge_true_false_nil() {
        assert_eq!(
            lex_all("true false nil"),
            vec![
                (TokenKind::True, "true"),
                (TokenKind::False, "false"),
                (TokenKind::Nil, "nil"),
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} := 1", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[1], (TokenKind::Identifier, name.as_str()));
    }

    #[test]
    fn test_edge_only_garbage() {
        let mut handler = Handler::new();
        let tokens = tokenize_with("$#!?^&|~`", &LexerConfig::default(), &mut handler).unwrap();
        assert!(tokens.is_empty());
        assert_eq!(handler.error_count(), 9);
    }

    #[test]
    fn test_edge_leading_byte_order_mark_is_skipped() {
        let mut handler = Handler::new();
        let tokens = tokenize_with("\u{FEFF}x", &LexerConfig::default(), &mut handler).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(3, 4, 1, 1));
        assert!(!handler.has_errors());
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn proptest_deterministic() {
        proptest!(|(source in "[ -~\n]{0,200}")| {
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        });
    }

    #[test]
    fn proptest_terminates_on_any_input() {
        proptest!(|(source in "\\PC{0,200}")| {
            let mut handler = Handler::new();
            let tokens = tokenize_with(&source, &LexerConfig::default(), &mut handler).unwrap();
            prop_assert!(tokens.len() <= source.len());
        });
    }

    #[test]
    fn proptest_text_matches_span() {
        proptest!(|(source in "[ -~\n\t]{0,200}")| {
            for token in tokenize(&source).unwrap() {
                prop_assert_eq!(token.span.slice(&source), Some(token.text));
                prop_assert!(!token.text.is_empty());
                prop_assert!(!token.text.contains('\n'));
            }
        });
    }

    #[test]
    fn proptest_tokens_are_ordered() {
        proptest!(|(source in "[ -~\n]{0,200}")| {
            let tokens = tokenize(&source).unwrap();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        });
    }

    #[test]
    fn proptest_lowercase_names_cover_the_name() {
        proptest!(|(name in "[a-z_][a-z0-9_]{0,15}")| {
            let tokens = tokenize(&name).unwrap();
            let text: String = tokens.iter().map(|t| t.text).collect();
            prop_assert_eq!(text, name.clone());
            prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Type));
        });
    }

    #[test]
    fn proptest_lowercase_names_are_single_words() {
        proptest!(|(name in "[a-z_][a-z0-9_]{0,15}")| {
            let tokens = lex_whole_words(&name);
            prop_assert_eq!(tokens.len(), 1);
            let (kind, text) = tokens[0];
            prop_assert_eq!(text, name.as_str());
            prop_assert!(
                kind == TokenKind::Identifier
                    || kind.is_keyword()
                    || kind.is_primitive_type()
                    || matches!(kind, TokenKind::And | TokenKind::Or | TokenKind::Not)
            );
        });
    }

    #[test]
    fn proptest_capitalized_names_are_types() {
        proptest!(|(name in "[A-Z][a-zA-Z0-9_]{0,15}")| {
            let tokens = tokenize(&name).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Type);
        });
    }

    #[test]
    fn proptest_floats_are_single_tokens() {
        proptest!(|(int in 0u32..100000, frac in 0u32..100000, exp in proptest::option::of(-300i32..300))| {
            let text = match exp {
                Some(e) => format!("{}.{}e{}", int, frac, e),
                None => format!("{}.{}", int, frac),
            };
            let tokens = tokenize(&text).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        });
    }
}
