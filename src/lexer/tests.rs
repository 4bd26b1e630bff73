//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals, valid and malformed
//! - Single-character symbols
//! - Comments
//! - End-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.ks".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_definition() {
    assert_eq!(
        kinds("def foo(x y) x+y"),
        vec![
            TokenKind::Def,
            TokenKind::Identifier("foo".to_string()),
            TokenKind::Symbol('('),
            TokenKind::Identifier("x".to_string()),
            TokenKind::Identifier("y".to_string()),
            TokenKind::Symbol(')'),
            TokenKind::Identifier("x".to_string()),
            TokenKind::Symbol('+'),
            TokenKind::Identifier("y".to_string()),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("def extern define externs"),
        vec![
            TokenKind::Def,
            TokenKind::Extern,
            TokenKind::Identifier("define".to_string()),
            TokenKind::Identifier("externs".to_string()),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds("foo bar2 CamelCase a1b2");

    assert_eq!(tokens[0], TokenKind::Identifier("foo".to_string()));
    assert_eq!(tokens[1], TokenKind::Identifier("bar2".to_string()));
    assert_eq!(tokens[2], TokenKind::Identifier("CamelCase".to_string()));
    assert_eq!(tokens[3], TokenKind::Identifier("a1b2".to_string()));
    assert_eq!(tokens[4], TokenKind::EOF);
}

#[test]
fn test_underscore_is_a_symbol() {
    assert_eq!(
        kinds("_a"),
        vec![
            TokenKind::Symbol('_'),
            TokenKind::Identifier("a".to_string()),
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    assert_eq!(
        kinds("42 3.14 0 .5 7."),
        vec![
            TokenKind::Number(42.0),
            TokenKind::Number(3.14),
            TokenKind::Number(0.0),
            TokenKind::Number(0.5),
            TokenKind::Number(7.0),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_malformed_numbers_are_kept_whole() {
    assert_eq!(
        kinds("1.2.3 . 4"),
        vec![
            TokenKind::InvalidNumber("1.2.3".to_string()),
            TokenKind::InvalidNumber(".".to_string()),
            TokenKind::Number(4.0),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(
        kinds("2x"),
        vec![
            TokenKind::Number(2.0),
            TokenKind::Identifier("x".to_string()),
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_symbols() {
    assert_eq!(
        kinds("( ) , ; < + - * / ="),
        vec![
            TokenKind::Symbol('('),
            TokenKind::Symbol(')'),
            TokenKind::Symbol(','),
            TokenKind::Symbol(';'),
            TokenKind::Symbol('<'),
            TokenKind::Symbol('+'),
            TokenKind::Symbol('-'),
            TokenKind::Symbol('*'),
            TokenKind::Symbol('/'),
            TokenKind::Symbol('='),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("# a comment\n1"),
        vec![TokenKind::Number(1.0), TokenKind::EOF]
    );
}

#[test]
fn test_consecutive_comments() {
    assert_eq!(
        kinds("# one\r\n# two\n  # three\nx # trailing"),
        vec![TokenKind::Identifier("x".to_string()), TokenKind::EOF]
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x".as_bytes(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier("x".to_string()));
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("def  foo(x)".to_string(), Some("test.ks".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[5].span.start.0, 11);
    assert_eq!(tokens[5].span.start.1.as_str(), "test.ks");
}

#[test]
fn test_offsets_saturate_on_long_streams() {
    let mut lexer = Lexer::new("ab cd".as_bytes(), None).starting_at(u32::MAX - 1);

    let first = lexer.next_token();
    assert_eq!(first.kind, TokenKind::Identifier("ab".to_string()));
    assert_eq!(first.span.start.0, u32::MAX - 1);

    let second = lexer.next_token();
    assert_eq!(second.kind, TokenKind::Identifier("cd".to_string()));
    assert_eq!(second.span.end.0, u32::MAX);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new("".as_bytes(), None);
    assert_eq!(lexer.file().as_str(), "shell");
}
