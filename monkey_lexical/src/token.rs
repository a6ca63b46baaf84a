//! Is a module containing the [`Token`] type, the closed [`TokenKind`] enumeration and the
//! keyword table.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing keywords in the Monkey programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref KEYWORD_TABLE: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }

        KEYWORD_TABLE.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the reserved source text of the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }

    /// Gets the tag name the keyword is displayed with, e.g. `LET`.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is the closed enumeration of token tags produced by the [`crate::scanner::Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum TokenKind {
    /// A single character outside of the lexical grammar.
    Illegal,

    /// The end of the input; its literal is always empty.
    Eof,

    /// An identifier that is not a keyword.
    Ident,

    /// A run of decimal digits.
    Int,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,

    /// A reserved word from the keyword table.
    Keyword(KeywordKind),
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self { Self::Keyword(keyword) }
}

impl TokenKind {
    /// Classifies identifier text: the keyword's tag if `ident` is reserved, [`TokenKind::Ident`]
    /// otherwise.
    #[must_use]
    pub fn lookup_ident(ident: &str) -> Self {
        KeywordKind::from_str(ident).map_or(Self::Ident, Self::Keyword)
    }

    /// Gets the tag name of the kind, e.g. `IDENT` or `NOT_EQUAL`.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Keyword(keyword) => keyword.tag_name(),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Represents a single token: its tag and the slice of input it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Token<'a> {
    /// The tag of the token.
    pub kind: TokenKind,

    /// The source text of the token; empty for [`TokenKind::Eof`].
    pub literal: &'a str,
}

impl<'a> Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}
