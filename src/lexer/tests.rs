//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and compound mnemonics
//! - Name, string and number literals
//! - Delimiter rules after literals
//! - Error cases

use super::{
    lexer::{tokenize, unquote, Lexer},
    tokens::{TokenCategory, TokenKind, RESERVED_LOOKUP},
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    let (tokens, _) = Lexer::new(source.to_string(), Some("test.wat".to_string())).lex();
    tokens
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

fn single_error(source: &str) -> String {
    let tokens = kinds_and_values(source);
    assert_eq!(tokens.len(), 1, "expected only an error token for {:?}", source);
    assert_eq!(tokens[0].0, TokenKind::Error);
    tokens[0].1.clone()
}

#[test]
fn test_tokenize_structure() {
    let tokens = kinds_and_values("  (\n   module \n)    ");

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::LParen, "("),
            tok(TokenKind::Module, "module"),
            tok(TokenKind::RParen, ")"),
        ]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert!(kinds_and_values("").is_empty());
    assert!(kinds_and_values(" \t\n\n ").is_empty());
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = kinds_and_values("( ) _ = / .");

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::LParen, "("),
            tok(TokenKind::RParen, ")"),
            tok(TokenKind::Underscore, "_"),
            tok(TokenKind::Equal, "="),
            tok(TokenKind::Slash, "/"),
            tok(TokenKind::Dot, "."),
        ]
    );
}

#[test]
fn test_every_keyword_lexes_to_its_kind() {
    for (keyword, kind) in RESERVED_LOOKUP.iter() {
        let tokens = kinds_and_values(keyword);
        assert_eq!(tokens, vec![tok(*kind, keyword)], "keyword {}", keyword);
    }
}

#[test]
fn test_every_keyword_splits_sign_suffix() {
    for (keyword, kind) in RESERVED_LOOKUP.iter() {
        let signed = format!("{}_s", keyword);
        assert_eq!(
            kinds_and_values(&signed),
            vec![
                tok(*kind, keyword),
                tok(TokenKind::Underscore, "_"),
                tok(TokenKind::S, "s"),
            ],
            "atom {}",
            signed
        );

        let unsigned = format!("{}_u", keyword);
        assert_eq!(
            kinds_and_values(&unsigned),
            vec![
                tok(*kind, keyword),
                tok(TokenKind::Underscore, "_"),
                tok(TokenKind::U, "u"),
            ],
            "atom {}",
            unsigned
        );
    }
}

#[test]
fn test_tokenize_atoms() {
    let tokens = kinds_and_values("i32 anyfunc add rotl call_indirect");

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::I32, "i32"),
            tok(TokenKind::Anyfunc, "anyfunc"),
            tok(TokenKind::Add, "add"),
            tok(TokenKind::Rotl, "rotl"),
            tok(TokenKind::CallIndirect, "call_indirect"),
        ]
    );
}

#[test]
fn test_tokenize_compound_mnemonics() {
    let tokens = kinds_and_values("offset=0x03 align=8 trunc_s i64.extend_s/i32");

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Offset, "offset"),
            tok(TokenKind::Equal, "="),
            tok(TokenKind::Number, "0x03"),
            tok(TokenKind::Align, "align"),
            tok(TokenKind::Equal, "="),
            tok(TokenKind::Number, "8"),
            tok(TokenKind::Trunc, "trunc"),
            tok(TokenKind::Underscore, "_"),
            tok(TokenKind::S, "s"),
            tok(TokenKind::I64, "i64"),
            tok(TokenKind::Dot, "."),
            tok(TokenKind::Extend, "extend"),
            tok(TokenKind::Underscore, "_"),
            tok(TokenKind::S, "s"),
            tok(TokenKind::Slash, "/"),
            tok(TokenKind::I32, "i32"),
        ]
    );
}

#[test]
fn test_split_token_spans() {
    let tokens = tokenize("trunc_u", None).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 5);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[2].span.end.0, 7);
}

#[test]
fn test_unknown_atom_is_an_error() {
    assert_eq!(single_error("foo"), "unexpected token: foo");
    assert_eq!(single_error("Module"), "unexpected token: Module");
    assert_eq!(single_error("foo_s"), "unexpected token: foo_s");
    // Bare signs only exist as part of a suffix.
    assert_eq!(single_error("s"), "unexpected token: s");
}

#[test]
fn test_tokenize_strings() {
    let cases = [
        (r#"  ""  "#, r#""""#),
        (r#" "a b c ""#, r#""a b c ""#),
        (r#"   "\"""#, r#""\"""#),
        (r#"  "\\""#, r#""\\""#),
        (r#" "\\\"""#, r#""\\\"""#),
        (r#"    "\\\\""#, r#""\\\\""#),
        (r#""\n\t\'\41\ff""#, r#""\n\t\'\41\ff""#),
        ("\"caf\u{e9}\"", "\"caf\u{e9}\""),
    ];

    for (source, expected) in cases {
        assert_eq!(
            kinds_and_values(source),
            vec![tok(TokenKind::String, expected)],
            "source {:?}",
            source
        );
    }
}

#[test]
fn test_tokenize_adjacent_strings() {
    assert_eq!(
        kinds_and_values(r#""foo" "bar""#),
        vec![tok(TokenKind::String, r#""foo""#), tok(TokenKind::String, r#""bar""#)]
    );
}

#[test]
fn test_unclosed_string() {
    assert_eq!(single_error(r#" ""#), "unclosed string literal");
    assert_eq!(single_error(" \"\n"), "unclosed string literal");
    assert_eq!(single_error("\"abc\ndef\""), "unclosed string literal");
}

#[test]
fn test_illegal_escape() {
    assert!(single_error(r#""\q""#).starts_with("illegal escape in string literal"));
    assert!(single_error(r#""\4""#).starts_with("illegal escape in string literal"));
    assert!(single_error(r#""\4g""#).starts_with("illegal escape in string literal"));
    assert!(single_error(r#""\"#).starts_with("illegal escape in string literal"));
}

#[test]
fn test_illegal_control_character() {
    assert!(single_error("\"a\u{1}b\"")
        .starts_with("illegal control character in string literal"));
    assert!(single_error("\"a\u{7f}b\"")
        .starts_with("illegal control character in string literal"));
    assert!(single_error("\"a\tb\"").starts_with("illegal control character in string literal"));
}

#[test]
fn test_tokenize_names() {
    assert_eq!(kinds_and_values("$foo"), vec![tok(TokenKind::Name, "$foo")]);
    assert_eq!(
        kinds_and_values(r#"$foo "bar""#),
        vec![tok(TokenKind::Name, "$foo"), tok(TokenKind::String, r#""bar""#)]
    );
    assert_eq!(
        kinds_and_values("$a.b/c+d'e_f$g"),
        vec![tok(TokenKind::Name, "$a.b/c+d'e_f$g")]
    );
    assert_eq!(
        kinds_and_values("($x)"),
        vec![
            tok(TokenKind::LParen, "("),
            tok(TokenKind::Name, "$x"),
            tok(TokenKind::RParen, ")"),
        ]
    );
}

#[test]
fn test_empty_name_is_an_error() {
    assert!(single_error("$").starts_with("unexpected character in name literal"));
    assert!(single_error("$ x").starts_with("unexpected character in name literal"));
}

#[test]
fn test_tokenize_decimal_numbers() {
    assert_eq!(
        kinds_and_values("0123 123 -123 +123"),
        vec![
            tok(TokenKind::Number, "0123"),
            tok(TokenKind::Number, "123"),
            tok(TokenKind::Number, "-123"),
            tok(TokenKind::Number, "+123"),
        ]
    );
}

#[test]
fn test_tokenize_hex_numbers() {
    assert_eq!(
        kinds_and_values("0xaBc -0XaBc +0xaBc"),
        vec![
            tok(TokenKind::Number, "0xaBc"),
            tok(TokenKind::Number, "-0XaBc"),
            tok(TokenKind::Number, "+0xaBc"),
        ]
    );
}

#[test]
fn test_tokenize_fractions() {
    assert_eq!(
        kinds_and_values("0. 0.123 -0.123 +0.123"),
        vec![
            tok(TokenKind::Number, "0."),
            tok(TokenKind::Number, "0.123"),
            tok(TokenKind::Number, "-0.123"),
            tok(TokenKind::Number, "+0.123"),
        ]
    );
}

#[test]
fn test_tokenize_exponents() {
    assert_eq!(
        kinds_and_values("1.23e10 -1.23E-10 +1.23e+10 +1e+10 +1.e+10"),
        vec![
            tok(TokenKind::Number, "1.23e10"),
            tok(TokenKind::Number, "-1.23E-10"),
            tok(TokenKind::Number, "+1.23e+10"),
            tok(TokenKind::Number, "+1e+10"),
            tok(TokenKind::Number, "+1.e+10"),
        ]
    );
}

#[test]
fn test_tokenize_hex_fractions() {
    // `e`/`E` are hex digits here, so they never start an exponent.
    assert_eq!(
        kinds_and_values("0xabc.def 0xabc.defE2 0xabc.defe2"),
        vec![
            tok(TokenKind::Number, "0xabc.def"),
            tok(TokenKind::Number, "0xabc.defE2"),
            tok(TokenKind::Number, "0xabc.defe2"),
        ]
    );
}

#[test]
fn test_number_text_is_exact_input() {
    let source = "(+0x1F.a -7.e-3)";
    let tokens = tokenize(source, None).unwrap();

    for token in tokens.iter().filter(|token| token.kind == TokenKind::Number) {
        let start = token.span.start.0 as usize;
        let end = token.span.end.0 as usize;
        assert_eq!(&source[start..end], token.value);
    }
    assert_eq!(tokens[1].value, "+0x1F.a");
    assert_eq!(tokens[2].value, "-7.e-3");
}

#[test]
fn test_number_followed_by_letter_is_an_error() {
    assert!(single_error("123abc").starts_with("unexpected character in number literal"));
    assert!(single_error("0x1g").starts_with("unexpected character in number literal"));
    assert!(single_error("1_000").starts_with("unexpected character in number literal"));
}

#[test]
fn test_non_finite_and_hex_float_exponents_are_rejected() {
    let (tokens, error) = Lexer::new("+inf".to_string(), None).lex();
    assert!(error.is_some());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Error);

    let (tokens, error) = Lexer::new("0x1.8p+2".to_string(), None).lex();
    assert!(error.is_some());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Error);

    assert_eq!(single_error("nan"), "unexpected token: nan");
}

#[test]
fn test_literals_need_a_right_delimiter() {
    let tokens = kinds_and_values(r#""a""b""#);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], tok(TokenKind::String, r#""a""#));
    assert_eq!(tokens[1].0, TokenKind::Error);
    assert!(tokens[1].1.ends_with("expected one of space/newline/tab/paren"));

    let tokens = kinds_and_values("$x=1");
    assert_eq!(tokens[0], tok(TokenKind::Name, "$x=1"));

    let tokens = kinds_and_values("12.5.");
    assert_eq!(tokens[0], tok(TokenKind::Number, "12.5"));
    assert_eq!(tokens[1].0, TokenKind::Error);

    let tokens = kinds_and_values("1\"a\"");
    assert_eq!(tokens[1].0, TokenKind::Error);
}

#[test]
fn test_unexpected_character() {
    assert_eq!(single_error("@"), "unexpected character: U+0040 '@'");
    assert!(single_error(";; comment").starts_with("unexpected character"));
}

#[test]
fn test_error_stops_the_stream() {
    let (tokens, error) = Lexer::new("(module # (func))".to_string(), None).lex();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::Module);
    assert_eq!(tokens[2].kind, TokenKind::Error);

    let error = error.unwrap();
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().0, 8);
    assert_eq!(tokens[2].value, error.to_string());
}

#[test]
fn test_tokenize_returns_error() {
    let error = tokenize("(module \"open", Some("test.wat".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnclosedString");
    assert!(error.is_lexical());
    assert_eq!(error.get_position().1.as_str(), "test.wat");
}

#[test]
fn test_token_equality_ignores_span() {
    let first = tokenize("i32", None).unwrap();
    let second = tokenize("   i32", None).unwrap();

    assert_eq!(first, second);
    assert_ne!(first[0].span, second[0].span);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("$f \"x\"", None).unwrap();

    assert_eq!(tokens[0].to_string(), "Name($f)");
    assert_eq!(tokens[1].to_string(), "String(\"x\")");
}

#[test]
fn test_token_categories() {
    assert_eq!(TokenKind::I32.category(), TokenCategory::ValueType);
    assert_eq!(TokenKind::Anyfunc.category(), TokenCategory::ElemType);
    assert_eq!(TokenKind::Popcnt.category(), TokenCategory::UnaryOp);
    assert_eq!(TokenKind::Rotr.category(), TokenCategory::BinaryOp);
    assert_eq!(TokenKind::Ne.category(), TokenCategory::RelOp);
    assert_eq!(TokenKind::U.category(), TokenCategory::Sign);
    assert_eq!(TokenKind::Reinterpret.category(), TokenCategory::ConversionOp);
    assert_eq!(TokenKind::Offset.category(), TokenCategory::MemoryArg);
    assert_eq!(TokenKind::Loop.category(), TokenCategory::BlockInstr);
    assert_eq!(TokenKind::TeeLocal.category(), TokenCategory::Op);
    assert_eq!(TokenKind::Module.category(), TokenCategory::Keyword);
    assert_eq!(TokenKind::LParen.category(), TokenCategory::Structural);
    assert_eq!(TokenKind::Number.category(), TokenCategory::Literal);
    assert_eq!(TokenKind::Error.category(), TokenCategory::Error);

    let value_types = RESERVED_LOOKUP
        .values()
        .filter(|kind| kind.is_value_type())
        .count();
    assert_eq!(value_types, 4);

    assert!(TokenKind::Name.is_var());
    assert!(TokenKind::Number.is_var());
    assert!(!TokenKind::String.is_var());
}

#[test]
fn test_unquote() {
    assert_eq!(unquote(r#""""#), Some(String::new()));
    assert_eq!(unquote(r#""env""#), Some("env".to_string()));
    assert_eq!(unquote(r#""a\n\t\\\'\"""#), Some("a\n\t\\'\"".to_string()));
    assert_eq!(unquote(r#""\41\42""#), Some("AB".to_string()));
    assert_eq!(unquote(r#""\c3\a9""#), Some("\u{e9}".to_string()));

    assert_eq!(unquote(r#""\ff""#), None);
    assert_eq!(unquote("env"), None);
    assert_eq!(unquote("\""), None);
}
