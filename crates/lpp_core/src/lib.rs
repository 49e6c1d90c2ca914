//! lpp_core: Core utilities shared by the lpp crates.
//!
//! Provides text spans and line maps used to locate tokens and
//! diagnostics in source text.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
