//! Text span and line map types for source location tracking.
//!
//! Positions are measured in characters (Unicode scalar values), the same
//! unit the scanner advances by. Use [`byte_offset_of`] when a byte offset
//! into the original `&str` is needed.

use serde::Serialize;
use std::fmt;

/// A position in source text, measured in characters from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct TextSpan {
    /// The character offset where this span starts.
    pub start: TextPos,
    /// The length of this span in characters.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column, in characters.
    pub character: u32,
}

impl fmt::Display for LineAndColumn {
    /// Renders 1-based `line:column`, the form editors expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A map from character offsets to line numbers, built from source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Character offsets of the start of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                line_starts.push((i + 1) as TextPos);
            }
        }
        Self { line_starts }
    }

    /// Get the line number (0-based) for a character offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line as u32,
            Err(line) => (line - 1) as u32,
        }
    }

    /// Get the line and column for a character offset.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line as usize];
        LineAndColumn {
            line,
            character: pos - line_start,
        }
    }
}

/// Translate a character offset into a byte offset into `text`.
///
/// Offsets past the end clamp to `text.len()`.
pub fn byte_offset_of(text: &str, pos: TextPos) -> usize {
    text.char_indices()
        .nth(pos as usize)
        .map_or(text.len(), |(offset, _)| offset)
}
