//! lpp_scanner: Lexer/tokenizer for lpp source code.
//!
//! Produces one classified token per call from an owned source string:
//! - Identifiers and the keyword set
//! - Integer literals
//! - One- and two-character operators (`=`, `==`, `!=`, `<=`, ...)
//! - Delimiters
//!
//! Unrecognized characters never abort scanning; each becomes an
//! `Illegal` token and an invalid-character diagnostic.

mod char_codes;
mod scanner;
mod token;

pub use char_codes::{is_digit, is_letter, is_white_space};
pub use lpp_syntax::TokenKind;
pub use scanner::Scanner;
pub use token::Token;
