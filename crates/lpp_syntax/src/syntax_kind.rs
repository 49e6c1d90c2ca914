//! TokenKind enum - every lexical class the scanner can produce.

use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of a scanned token.
///
/// The set is closed: adding a token type means adding a variant, and every
/// `match` over it below is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Special
    // ========================================================================
    Illegal,
    Eof,

    // ========================================================================
    // Identifiers and literals
    // ========================================================================
    Ident,
    Int,

    // ========================================================================
    // Operators
    // ========================================================================
    Assign,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Negation,
    Plus,
    Minus,
    Slash,
    Asterisk,

    // ========================================================================
    // Punctuation
    // ========================================================================
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // ========================================================================
    // Keywords
    // ========================================================================
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl TokenKind {
    /// Look up a keyword by its spelling.
    ///
    /// Only exact, case-sensitive matches are keywords; anything else is an
    /// identifier.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "function" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            "return" => Some(TokenKind::Return),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Let),
            _ => None,
        }
    }

    /// The fixed source spelling of this kind, if it has one.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Illegal | TokenKind::Eof | TokenKind::Ident | TokenKind::Int => {
                return None
            }
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Negation => "!",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Slash => "/",
            TokenKind::Asterisk => "*",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "function",
            TokenKind::Let => "var",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
        };
        Some(text)
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Whether this kind is an operator (`=`, `==`, `+`, ...).
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::Negation
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Asterisk
        )
    }

    /// Whether this kind is a delimiter (`,`, `;`, parens, braces).
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }

    /// The upper-case category name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LE",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GE",
            TokenKind::Negation => "NEGATION",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Slash => "DIVISION",
            TokenKind::Asterisk => "MULTIPLICATION",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: [TokenKind; 7] = [
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::True,
        TokenKind::False,
    ];

    #[test]
    fn test_keyword_table() {
        assert_eq!(TokenKind::from_keyword("var"), Some(TokenKind::Let));
        assert_eq!(TokenKind::from_keyword("function"), Some(TokenKind::Function));
        assert_eq!(TokenKind::from_keyword("if"), Some(TokenKind::If));
        assert_eq!(TokenKind::from_keyword("else"), Some(TokenKind::Else));
        assert_eq!(TokenKind::from_keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::from_keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::from_keyword("false"), Some(TokenKind::False));
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(TokenKind::from_keyword("cinco"), None);
        assert_eq!(TokenKind::from_keyword("Var"), None);
        assert_eq!(TokenKind::from_keyword("variable"), None);
        assert_eq!(TokenKind::from_keyword("If"), None);
        assert_eq!(TokenKind::from_keyword("let"), None);
        assert_eq!(TokenKind::from_keyword("return_"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn test_keyword_text_round_trips_through_table() {
        for kind in KEYWORDS {
            assert!(kind.is_keyword());
            let text = kind.text().unwrap();
            assert_eq!(TokenKind::from_keyword(text), Some(kind));
        }
    }

    #[test]
    fn test_classification_is_disjoint() {
        assert!(TokenKind::LtEq.is_operator());
        assert!(!TokenKind::LtEq.is_punctuation());
        assert!(TokenKind::Semicolon.is_punctuation());
        assert!(!TokenKind::Semicolon.is_operator());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Illegal.is_operator());
    }

    #[test]
    fn test_text_for_variable_kinds() {
        assert_eq!(TokenKind::Ident.text(), None);
        assert_eq!(TokenKind::Int.text(), None);
        assert_eq!(TokenKind::Eof.text(), None);
        assert_eq!(TokenKind::Illegal.text(), None);
        assert_eq!(TokenKind::NotEq.text(), Some("!="));
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
        assert_eq!(TokenKind::Let.to_string(), "LET");
        assert_eq!(TokenKind::Slash.to_string(), "DIVISION");
        assert_eq!(TokenKind::Asterisk.to_string(), "MULTIPLICATION");
        assert_eq!(TokenKind::LtEq.to_string(), "LE");
        assert_eq!(TokenKind::GtEq.to_string(), "GE");
    }
}
