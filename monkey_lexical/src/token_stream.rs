//! Contains the [`TokenStream`] struct and its related types.

use std::sync::Arc;

use derive_more::Deref;
use derive_new::new;
use monkey_base::{
    diagnostic::Handler,
    source_file::{SourceElement, SourceFile, Span},
};

use crate::{
    error::{self, IllegalCharacter},
    scanner::Scanner,
    token::TokenKind,
};

/// Represents a token together with the span of source code it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct SpannedToken {
    /// The tag of the token.
    pub kind: TokenKind,

    /// Is the span that makes up the token.
    pub span: Span,
}

impl SpannedToken {
    /// Gets the source text of the token.
    #[must_use]
    pub fn literal(&self) -> &str { self.span.str() }
}

impl SourceElement for SpannedToken {
    fn span(&self) -> Span { self.span.clone() }
}

/// Is the list of tokens of a source file, always terminated by exactly one
/// [`TokenKind::Eof`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<SpannedToken>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// The [`Scanner`] is pulled until it yields the end of input. Every illegal character is
    /// reported to `handler` and still kept in the stream, so the tokens are the same whatever
    /// the handler does with the diagnostics.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        let mut scanner = Scanner::new(source_file.content());
        let mut tokens = Vec::new();

        loop {
            let (start, token) = scanner.lex();
            let span = Span::new(source_file.clone(), start, start + token.literal.len())
                .expect("the scanner only splits the input on character boundaries");

            if token.kind == TokenKind::Illegal {
                handler.receive(IllegalCharacter { span: span.clone() }.into());
            }

            tokens.push(SpannedToken::new(token.kind, span));

            if token.kind == TokenKind::Eof {
                break;
            }
        }

        Self { tokens }
    }

    /// Dissolves this struct into its list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<SpannedToken> { self.tokens }
}
