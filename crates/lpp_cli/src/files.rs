//! Tokenizing whole files.
//!
//! Every file gets its own [`Scanner`], so files are scanned in parallel.

use crate::error::CliError;
use lpp_core::text::{byte_offset_of, LineMap};
use lpp_diagnostics::Diagnostic;
use lpp_scanner::{Scanner, Token};
use miette::{NamedSource, SourceSpan};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The result of scanning one file.
#[derive(Debug, Serialize)]
pub struct ScannedFile {
    pub file: String,
    #[serde(skip)]
    pub source: String,
    /// Every token, including the trailing `Eof`.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScannedFile {
    /// Scan `source` as the contents of `file`.
    pub fn scan(file: impl Into<String>, source: String) -> Self {
        let file = file.into();
        let mut scanner = Scanner::new(&source);
        let mut tokens: Vec<Token> = scanner.by_ref().collect();
        tokens.push(Token::eof());

        let mut diagnostics = scanner.take_diagnostics();
        diagnostics.sort();
        let diagnostics = diagnostics
            .into_iter()
            .map(|d| d.in_file(file.clone()))
            .collect();

        debug!(file = %file, tokens = tokens.len(), "scanned file");
        Self {
            file,
            source,
            tokens,
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

fn read_file(path: &Path) -> Result<ScannedFile, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ScannedFile::scan(path.display().to_string(), source))
}

/// Read and scan all files. Results keep the order of `paths`.
pub fn scan_files(paths: &[PathBuf]) -> Result<Vec<ScannedFile>, CliError> {
    info!(files = paths.len(), "scanning files");
    paths.par_iter().map(|path| read_file(path)).collect()
}

/// Print tokens one per line, `Eof` excluded. With several files each
/// block is headed by the file name.
pub fn print_tokens<W: Write>(out: &mut W, files: &[ScannedFile]) -> Result<(), CliError> {
    let with_headers = files.len() > 1;
    for scanned in files {
        if with_headers {
            writeln!(out, "==> {} <==", scanned.file)?;
        }
        for token in scanned.tokens.iter().filter(|t| !t.is_eof()) {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}

/// Print every file as one JSON document per line.
pub fn print_json<W: Write>(out: &mut W, files: &[ScannedFile]) -> Result<(), CliError> {
    for scanned in files {
        serde_json::to_writer(&mut *out, scanned)?;
        writeln!(out)?;
    }
    Ok(())
}

/// An invalid-character diagnostic rendered against its source.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lpp::invalid_character))]
struct SourceDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("not a valid character")]
    span: Option<SourceSpan>,
}

/// Plain `file:line:col: error LPP1127: message` lines.
pub fn format_plain(scanned: &ScannedFile) -> Vec<String> {
    let line_map = LineMap::new(&scanned.source);
    scanned
        .diagnostics
        .iter()
        .map(|diag| {
            let location = diag
                .span
                .map(|span| format!(":{}", line_map.line_and_column_of(span.start)))
                .unwrap_or_default();
            format!(
                "{}{}: {} LPP{}: {}",
                scanned.file, location, diag.category, diag.code, diag.message_text
            )
        })
        .collect()
}

/// Print diagnostics to stderr, graphically when `fancy` is set.
pub fn report_diagnostics(files: &[ScannedFile], fancy: bool) {
    for scanned in files {
        if !fancy {
            for line in format_plain(scanned) {
                eprintln!("{line}");
            }
            continue;
        }
        for diag in &scanned.diagnostics {
            let span = diag.span.map(|span| {
                let start = byte_offset_of(&scanned.source, span.start);
                let end = byte_offset_of(&scanned.source, span.end());
                SourceSpan::from((start, end - start))
            });
            let report = miette::Report::new(SourceDiagnostic {
                message: diag.message_text.clone(),
                src: NamedSource::new(&scanned.file, scanned.source.clone()),
                span,
            });
            eprintln!("{report:?}");
        }
    }
}
