//! Tokens produced by the scanner.

use lpp_syntax::TokenKind;
use serde::Serialize;
use std::fmt;

/// A scanned token: its kind and the exact source text it covers.
///
/// Tokens are plain values; two tokens are equal when both the kind and
/// the literal match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token. Empty for `Eof`.
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Literal: {}", self.kind, self.literal)
    }
}
