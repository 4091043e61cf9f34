//! Unit tests for the lexer module.

use crate::errors::errors::ErrorImpl;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.bl".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var print if else while"),
        vec![
            TokenKind::Var,
            TokenKind::Print,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore variable".to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // keyword prefix does not make a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "variable");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "value: {a}" "multiple words""#.to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "value: {a}");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "quote\"test""#.to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % ^ == != < > <= >= = && || !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "var x = 5; // this is a comment\nvar y = 10;".to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Var);
    assert_eq!(tokens[6].value, "y");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "var x = 1;\n\nprint(\"a\nb\");\nx = 2;".to_string();
    let tokens = tokenize(source, Some("test.bl".to_string())).unwrap();

    assert_eq!(tokens[0].line(), 1);
    // print
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!(tokens[5].line(), 3);
    // the multi-line string starts on line 3, the token after it is on line 4
    assert_eq!(tokens[7].kind, TokenKind::String);
    assert_eq!(tokens[7].line(), 3);
    assert_eq!(tokens[8].kind, TokenKind::CloseParen);
    assert_eq!(tokens[8].line(), 4);
    assert_eq!(tokens[10].value, "x");
    assert_eq!(tokens[10].line(), 5);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("var x = 1;\nx = @;".to_string(), None).unwrap_err();

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("print(\"oops);".to_string(), None).unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}
