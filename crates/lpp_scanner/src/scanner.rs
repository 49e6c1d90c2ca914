//! The lpp scanner/lexer.
//!
//! Walks the source one character at a time and hands out one token per
//! call to [`Scanner::next_token`]. The scanner works on Unicode scalar
//! values, so a multi-byte character such as `¡` is a single unit.

use crate::char_codes::*;
use crate::token::Token;
use lpp_core::text::{TextPos, TextSpan};
use lpp_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use lpp_syntax::TokenKind;
use tracing::{debug, trace};

/// The scanner converts lpp source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Index of the character in `ch`.
    position: usize,
    /// Index of the next character to read. Always `position + 1`.
    read_position: usize,
    /// The current character, `None` once past the end.
    ch: Option<char>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        debug!(chars = text.len(), "created scanner");
        let mut scanner = Self {
            text,
            position: 0,
            read_position: 0,
            ch: None,
            diagnostics: DiagnosticCollection::new(),
        };
        scanner.read_char();
        scanner
    }

    /// Scan every token in `text`, including the trailing `Eof`.
    pub fn tokenize(text: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(text);
        let mut tokens: Vec<Token> = scanner.by_ref().collect();
        tokens.push(Token::eof());
        tokens
    }

    /// Index of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the next character to be read.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// The current character, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.ch
    }

    /// Whether every character has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.ch.is_none()
    }

    /// Look at the character after the current one without advancing.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text.get(self.read_position).copied()
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Advance by one character.
    ///
    /// Once past the end the cursor stays put, so repeated calls at end of
    /// input are no-ops.
    fn read_char(&mut self) {
        if self.read_position > self.text.len() {
            return;
        }
        self.ch = self.text.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_white_space(&mut self) {
        while self.ch.map_or(false, is_white_space) {
            self.read_char();
        }
    }

    /// Scan the next token.
    ///
    /// Never fails: unknown characters come back as `Illegal` tokens, and
    /// once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_white_space();
        let start = self.position;

        let token = match self.ch {
            None => Token::eof(),
            Some(ch) if is_letter(ch) => {
                // Runs leave the cursor on the first character after them.
                let token = self.scan_identifier();
                trace_token(&token, start);
                return token;
            }
            Some(ch) if is_digit(ch) => {
                let token = self.scan_number();
                trace_token(&token, start);
                return token;
            }
            Some(ch) => match ch {
                PLUS => Token::new(TokenKind::Plus, ch),
                MINUS => Token::new(TokenKind::Minus, ch),
                SLASH => Token::new(TokenKind::Slash, ch),
                ASTERISK => Token::new(TokenKind::Asterisk, ch),
                OPEN_PAREN => Token::new(TokenKind::LParen, ch),
                CLOSE_PAREN => Token::new(TokenKind::RParen, ch),
                OPEN_BRACE => Token::new(TokenKind::LBrace, ch),
                CLOSE_BRACE => Token::new(TokenKind::RBrace, ch),
                COMMA => Token::new(TokenKind::Comma, ch),
                SEMICOLON => Token::new(TokenKind::Semicolon, ch),
                EQUALS => self.scan_with_equals(ch, TokenKind::Assign, TokenKind::Eq),
                LESS_THAN => self.scan_with_equals(ch, TokenKind::Lt, TokenKind::LtEq),
                GREATER_THAN => self.scan_with_equals(ch, TokenKind::Gt, TokenKind::GtEq),
                EXCLAMATION => self.scan_with_equals(ch, TokenKind::Negation, TokenKind::NotEq),
                _ => self.scan_illegal(ch),
            },
        };

        self.read_char();
        trace_token(&token, start);
        token
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Scan `=`, `<`, `>` or `!`, optionally followed by `=`.
    ///
    /// The second character is consumed here; the caller's trailing
    /// advance then moves past it.
    fn scan_with_equals(&mut self, ch: char, single: TokenKind, double: TokenKind) -> Token {
        if self.peek() == Some(EQUALS) {
            self.read_char();
            Token::new(double, String::from_iter([ch, EQUALS]))
        } else {
            Token::new(single, ch)
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.position;
        while self.ch.map_or(false, is_letter) {
            self.read_char();
        }
        let text = self.chars_to_string(start, self.position);

        // Check if it's a keyword
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.position;
        while self.ch.map_or(false, is_digit) {
            self.read_char();
        }
        Token::new(TokenKind::Int, self.chars_to_string(start, self.position))
    }

    fn scan_illegal(&mut self, ch: char) -> Token {
        let literal = ch.to_string();
        self.diagnostics.add(Diagnostic::with_span(
            TextSpan::new(self.position as TextPos, 1),
            &messages::INVALID_CHARACTER,
            &[&literal],
        ));
        Token::new(TokenKind::Illegal, literal)
    }

    /// Convert a range of chars to a String.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

// `Eof` is sticky, so `None` is too.
impl std::iter::FusedIterator for Scanner {}

fn trace_token(token: &Token, position: usize) {
    trace!(kind = %token.kind, literal = %token.literal, position, "scanned token");
}
