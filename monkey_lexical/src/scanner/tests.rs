use monkey_test::input::Input;
use proptest::{prelude::Arbitrary, prop_assert, prop_assert_eq, proptest};

use super::Scanner;
use crate::token::{self, KeywordKind, Token, TokenKind};

/// Pulls tokens until the end of input, which is included.
fn scan(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token();
        tokens.push(token);

        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}

fn kinds(input: &str) -> Vec<TokenKind> { scan(input).into_iter().map(|x| x.kind).collect() }

#[test]
fn empty_input() {
    assert_eq!(scan(""), vec![Token::new(TokenKind::Eof, "")]);
    assert_eq!(scan(" \t\r\n"), vec![Token::new(TokenKind::Eof, "")]);
}

#[test]
fn end_of_input_is_idempotent() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next_token(), Token::new(TokenKind::Ident, "x"));

    for _ in 0..4 {
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, ""));
    }

    assert_eq!(scanner.peek(), None);
}

#[test]
fn single_character_tokens() {
    assert_eq!(
        kinds(";(),+-*/><{}"),
        vec![
            TokenKind::Semicolon,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::GreaterThan,
            TokenKind::LessThan,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operator_disambiguation() {
    assert_eq!(scan("=")[0], Token::new(TokenKind::Assign, "="));
    assert_eq!(scan("==")[0], Token::new(TokenKind::Equal, "=="));
    assert_eq!(scan("!")[0], Token::new(TokenKind::Bang, "!"));
    assert_eq!(scan("!=")[0], Token::new(TokenKind::NotEqual, "!="));

    assert_eq!(kinds("="), vec![TokenKind::Assign, TokenKind::Eof]);
    assert_eq!(kinds("=="), vec![TokenKind::Equal, TokenKind::Eof]);
    assert_eq!(kinds("!"), vec![TokenKind::Bang, TokenKind::Eof]);
    assert_eq!(kinds("!="), vec![TokenKind::NotEqual, TokenKind::Eof]);
}

#[test]
fn two_character_operators_take_one_lookahead_only() {
    assert_eq!(
        kinds("==="),
        vec![TokenKind::Equal, TokenKind::Assign, TokenKind::Eof]
    );
    assert_eq!(
        kinds("!=="),
        vec![TokenKind::NotEqual, TokenKind::Assign, TokenKind::Eof]
    );
    assert_eq!(
        kinds("!!="),
        vec![TokenKind::Bang, TokenKind::NotEqual, TokenKind::Eof]
    );
    assert_eq!(
        kinds("= ="),
        vec![TokenKind::Assign, TokenKind::Assign, TokenKind::Eof]
    );
}

#[test]
fn peek_does_not_consume() {
    let mut scanner = Scanner::new("=5");

    assert_eq!(scanner.peek(), Some(b'5'));
    assert_eq!(scanner.peek(), Some(b'5'));
    assert_eq!(scanner.next_token(), Token::new(TokenKind::Assign, "="));
    assert_eq!(scanner.peek(), None);
    assert_eq!(scanner.next_token(), Token::new(TokenKind::Int, "5"));
}

#[test]
fn whitespace_produces_no_tokens() {
    assert_eq!(
        scan("   x   "),
        vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Eof, "")
        ]
    );
    assert_eq!(
        scan("\tx\r\n\ty \n"),
        vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Ident, "y"),
            Token::new(TokenKind::Eof, "")
        ]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        scan("fn let true false if else return fnord _let Let"),
        vec![
            Token::new(TokenKind::Keyword(KeywordKind::Function), "fn"),
            Token::new(TokenKind::Keyword(KeywordKind::Let), "let"),
            Token::new(TokenKind::Keyword(KeywordKind::True), "true"),
            Token::new(TokenKind::Keyword(KeywordKind::False), "false"),
            Token::new(TokenKind::Keyword(KeywordKind::If), "if"),
            Token::new(TokenKind::Keyword(KeywordKind::Else), "else"),
            Token::new(TokenKind::Keyword(KeywordKind::Return), "return"),
            Token::new(TokenKind::Ident, "fnord"),
            Token::new(TokenKind::Ident, "_let"),
            Token::new(TokenKind::Ident, "Let"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn digits_do_not_continue_an_identifier() {
    assert_eq!(
        scan("x1y"),
        vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Int, "1"),
            Token::new(TokenKind::Ident, "y"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn integers_are_maximal_munch() {
    assert_eq!(
        scan("12345;"),
        vec![
            Token::new(TokenKind::Int, "12345"),
            Token::new(TokenKind::Semicolon, ";"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
    assert_eq!(
        scan("007-1.5"),
        vec![
            Token::new(TokenKind::Int, "007"),
            Token::new(TokenKind::Minus, "-"),
            Token::new(TokenKind::Int, "1"),
            Token::new(TokenKind::Illegal, "."),
            Token::new(TokenKind::Int, "5"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn illegal_characters_do_not_abort() {
    assert_eq!(
        scan("@"),
        vec![
            Token::new(TokenKind::Illegal, "@"),
            Token::new(TokenKind::Eof, "")
        ]
    );
    assert_eq!(
        scan("a@@b"),
        vec![
            Token::new(TokenKind::Ident, "a"),
            Token::new(TokenKind::Illegal, "@"),
            Token::new(TokenKind::Illegal, "@"),
            Token::new(TokenKind::Ident, "b"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn non_ascii_characters_are_illegal_as_a_whole() {
    assert_eq!(
        scan("caf\u{e9} \u{1f600}1"),
        vec![
            Token::new(TokenKind::Ident, "caf"),
            Token::new(TokenKind::Illegal, "\u{e9}"),
            Token::new(TokenKind::Illegal, "\u{1f600}"),
            Token::new(TokenKind::Int, "1"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn interior_nul_is_not_end_of_input() {
    assert_eq!(
        scan("a\0b"),
        vec![
            Token::new(TokenKind::Ident, "a"),
            Token::new(TokenKind::Illegal, "\0"),
            Token::new(TokenKind::Ident, "b"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn let_statement() {
    assert_eq!(
        scan("let five = 5;"),
        vec![
            Token::new(TokenKind::Keyword(KeywordKind::Let), "let"),
            Token::new(TokenKind::Ident, "five"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Int, "5"),
            Token::new(TokenKind::Semicolon, ";"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn equality_expression() {
    assert_eq!(
        scan("10 == 10;"),
        vec![
            Token::new(TokenKind::Int, "10"),
            Token::new(TokenKind::Equal, "=="),
            Token::new(TokenKind::Int, "10"),
            Token::new(TokenKind::Semicolon, ";"),
            Token::new(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn program() {
    let input = "let add = fn(x, y) {\n  x + y;\n};\n\
                 if (5 < 10) {\n\treturn true;\n} else {\n\treturn !false;\n}\n\
                 10 != 9;\n";

    assert_eq!(
        kinds(input),
        vec![
            TokenKind::Keyword(KeywordKind::Let),
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Keyword(KeywordKind::Function),
            TokenKind::LeftParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Semicolon,
            TokenKind::Keyword(KeywordKind::If),
            TokenKind::LeftParen,
            TokenKind::Int,
            TokenKind::LessThan,
            TokenKind::Int,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Keyword(KeywordKind::Return),
            TokenKind::Keyword(KeywordKind::True),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Keyword(KeywordKind::Else),
            TokenKind::LeftBrace,
            TokenKind::Keyword(KeywordKind::Return),
            TokenKind::Bang,
            TokenKind::Keyword(KeywordKind::False),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Int,
            TokenKind::NotEqual,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_reports_start_positions() {
    let mut scanner = Scanner::new("  ab == 1");

    assert_eq!(scanner.lex(), (2, Token::new(TokenKind::Ident, "ab")));
    assert_eq!(scanner.lex(), (5, Token::new(TokenKind::Equal, "==")));
    assert_eq!(scanner.lex(), (8, Token::new(TokenKind::Int, "1")));
    assert_eq!(scanner.lex(), (9, Token::new(TokenKind::Eof, "")));
    assert_eq!(scanner.lex(), (9, Token::new(TokenKind::Eof, "")));
}

#[test]
fn iterator_stops_before_end_of_input() {
    let mut scanner = Scanner::new("a + 1");

    assert_eq!(scanner.by_ref().count(), 3);
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

proptest! {
    #[test]
    fn generated_tokens_are_scanned_back(
        input in token::tests::Tokens::arbitrary()
    ) {
        let source = input.to_string();
        let tokens = Scanner::new(&source).collect::<Vec<_>>();

        input.significant().assert(&tokens)?;
    }

    #[test]
    fn every_input_ends_in_eof(source in "\\PC*|[ -~]*") {
        let tokens = scan(&source);

        // every non-whitespace character ends up in exactly one literal
        prop_assert!(tokens.len() <= source.len() + 1);
        prop_assert_eq!(tokens.last().map(|x| x.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().map(|x| x.literal).collect::<String>(),
            source
                .chars()
                .filter(|x| !matches!(x, ' ' | '\t' | '\n' | '\r'))
                .collect::<String>()
        );
        prop_assert!(tokens[..tokens.len() - 1].iter().all(|x| x.kind != TokenKind::Eof));
    }
}
