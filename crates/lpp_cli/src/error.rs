use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `lpp` binary.
///
/// Scanning itself never fails; only I/O around it can.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}
