//! Character constants and character-class predicates used by the scanner.

pub const EQUALS: char = '=';
pub const EXCLAMATION: char = '!';
pub const LESS_THAN: char = '<';
pub const GREATER_THAN: char = '>';

pub const PLUS: char = '+';
pub const MINUS: char = '-';
pub const SLASH: char = '/';
pub const ASTERISK: char = '*';

pub const COMMA: char = ',';
pub const SEMICOLON: char = ';';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

pub const UNDERSCORE: char = '_';

/// Check if a character can appear in an identifier: ASCII letters and `_`.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is whitespace (space, tab, line breaks, ...).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}
