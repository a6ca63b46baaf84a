//! Contains the diagnostics that can be reported while tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use monkey_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// The source code contains a character that is not part of the lexical grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IllegalCharacter {
    /// The span of the illegal character.
    pub span: Span,
}

impl Display for IllegalCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format_args!("found an illegal character `{}`", self.span.str().escape_debug())
            ),
            SourceCodeDisplay::new(
                &self.span,
                Some("this character is not part of the language")
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical diagnostics that can be reported while
/// tokenizing the source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    IllegalCharacter(IllegalCharacter),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter(error) => write!(f, "{error}"),
        }
    }
}
