//! Contains the [`Scanner`], the pull-based state machine turning Monkey source text into
//! [`Token`]s.

use std::iter::FusedIterator;

use monkey_base::source_file::ByteIndex;

use crate::token::{Token, TokenKind};

/// Pulls [`Token`]s out of a source text one at a time.
///
/// The scanner keeps a cursor over its input: `position` is the index of the current character
/// and `read_position` the index of the character after it. Past the end of the input the current
/// character is the sentinel `None`, which no input byte can be mistaken for, so an interior NUL
/// byte is lexed as [`TokenKind::Illegal`] rather than as the end of input.
///
/// The scanner never backtracks and never fails: every call to [`Scanner::next_token`] returns a
/// token, and once the input is exhausted every call returns [`TokenKind::Eof`].
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Scanner<'a> {
    input: &'a str,
    position: ByteIndex,
    read_position: ByteIndex,
    character: Option<u8>,
}

fn is_letter(character: u8) -> bool { character.is_ascii_alphabetic() || character == b'_' }

fn is_digit(character: u8) -> bool { character.is_ascii_digit() }

fn is_whitespace(character: u8) -> bool { matches!(character, b' ' | b'\t' | b'\n' | b'\r') }

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the first character of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Self {
            input,
            position: 0,
            read_position: 0,
            character: None,
        };
        scanner.advance();
        scanner
    }

    /// Returns the character after the current one without moving the cursor, or `None` if the
    /// current character is the last one.
    #[must_use]
    pub fn peek(&self) -> Option<u8> { self.input.as_bytes().get(self.read_position).copied() }

    fn advance(&mut self) {
        self.character = self.peek();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.character.is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Consumes the maximal run of characters satisfying `predicate`.
    fn read_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a str {
        let start = self.position;

        while self.character.is_some_and(&predicate) {
            self.advance();
        }

        &self.input[start..self.position]
    }

    /// Picks `matched` and consumes the current character if the next one is `expected`;
    /// otherwise picks `single` and leaves the cursor where it is.
    fn either(&mut self, expected: u8, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(expected) {
            self.advance();
            matched
        } else {
            single
        }
    }

    /// Consumes the whole current character, all of its UTF-8 bytes, as an illegal token.
    fn illegal(&mut self) -> Token<'a> {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);

        for _ in 0..width {
            self.advance();
        }

        let literal = &self.input[start..self.position];
        tracing::debug!(position = start, literal, "illegal character");

        Token::new(TokenKind::Illegal, literal)
    }

    /// Scans the next token and returns it together with the byte index it starts at.
    ///
    /// The end-of-input token starts at the length of the input.
    pub fn lex(&mut self) -> (ByteIndex, Token<'a>) {
        self.skip_whitespace();

        let start = self.position;
        let Some(character) = self.character else {
            return (start, Token::new(TokenKind::Eof, ""));
        };

        let kind = match character {
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'>' => TokenKind::GreaterThan,
            b'<' => TokenKind::LessThan,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'=' => self.either(b'=', TokenKind::Equal, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEqual, TokenKind::Bang),

            // identifiers and integers leave the cursor past their last character
            character if is_letter(character) => {
                let ident = self.read_while(is_letter);
                return (start, Token::new(TokenKind::lookup_ident(ident), ident));
            }
            character if is_digit(character) => {
                let digits = self.read_while(is_digit);
                return (start, Token::new(TokenKind::Int, digits));
            }

            _ => return (start, self.illegal()),
        };

        self.advance();
        (start, Token::new(kind, &self.input[start..self.position]))
    }

    /// Scans the next token.
    ///
    /// Whitespace before the token is skipped. Once the input is exhausted this keeps returning
    /// the [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token<'a> { self.lex().1 }
}

/// Yields the tokens up to, but not including, the end of input.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

#[cfg(test)]
mod tests;
