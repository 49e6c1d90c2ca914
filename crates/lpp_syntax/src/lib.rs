//! lpp_syntax: Token kinds and the keyword table for the lpp language.

pub mod syntax_kind;

pub use syntax_kind::TokenKind;
