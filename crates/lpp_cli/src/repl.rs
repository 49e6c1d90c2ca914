//! Interactive token printer.
//!
//! Reads one line at a time, scans it with a fresh [`Scanner`] and prints
//! every token until end of input.

use crate::error::CliError;
use lpp_scanner::Scanner;
use std::io::{BufRead, Write};
use tracing::debug;

/// Typing this line ends the session.
pub const EXIT_COMMAND: &str = ".exit";

pub const DEFAULT_PROMPT: &str = ">> ";

/// Run the read loop until `.exit` or end of input.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> Result<(), CliError> {
    writeln!(output, "Bienvenido a lpp. Escribe {EXIT_COMMAND} para salir.")?;

    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            writeln!(output)?;
            break;
        }
        if line.trim() == EXIT_COMMAND {
            break;
        }

        debug!(line = line.trim_end(), "scanning line");
        for token in Scanner::new(&line) {
            writeln!(output, "{token}")?;
        }
    }
    Ok(())
}
