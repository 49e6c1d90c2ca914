//! lpp_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Diagnostics carry structured information about problems found in source
//! text. They never abort scanning; callers decide what is fatal.

use lpp_core::text::TextSpan;
use serde::Serialize;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1127).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TextSpan>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic anchored at a span of the current input.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    /// Attach the name of the file the diagnostic belongs to.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while scanning.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            let file_cmp = a.file.cmp(&b.file);
            if file_cmp != std::cmp::Ordering::Equal {
                return file_cmp;
            }
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        });
    }
}

impl IntoIterator for DiagnosticCollection {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1100-1199)
    // ========================================================================
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character '{0}'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_invalid_character_diagnostic() {
        let diag = Diagnostic::with_span(TextSpan::new(4, 1), &messages::INVALID_CHARACTER, &["@"]);
        assert!(diag.is_error());
        assert_eq!(diag.code, 1127);
        assert_eq!(diag.message_text, "Invalid character '@'.");
        assert_eq!(diag.span, Some(TextSpan::new(4, 1)));
        assert_eq!(diag.category.to_string(), "error");
        let diag = diag.in_file("main.lpp");
        assert_eq!(diag.file.as_deref(), Some("main.lpp"));
    }

    #[test]
    fn test_collection_sort_by_file_then_position() {
        let mut diags = DiagnosticCollection::new();
        assert!(diags.is_empty());
        diags.add(Diagnostic::with_span(TextSpan::new(9, 1), &messages::INVALID_CHARACTER, &["$"]));
        diags.add(Diagnostic::with_span(TextSpan::new(2, 1), &messages::INVALID_CHARACTER, &["@"]));
        diags.add(
            Diagnostic::with_span(TextSpan::new(0, 1), &messages::INVALID_CHARACTER, &["#"])
                .in_file("b.lpp"),
        );
        assert_eq!(diags.len(), 3);

        diags.sort();
        let starts: Vec<_> = diags.diagnostics().iter().map(|d| d.span.unwrap().start).collect();
        assert_eq!(starts, vec![2, 9, 0]);
        let files: Vec<_> = diags.into_iter().map(|d| d.file).collect();
        assert_eq!(files, vec![None, None, Some("b.lpp".to_string())]);
    }
}
