//! lpp: token printer for the lpp language.
//!
//! Usage:
//!   lpp                 start the interactive token printer
//!   lpp [options] FILE  print the tokens of each file

mod error;
mod files;
mod logging;
mod repl;

use clap::Parser as ClapParser;
use error::CliError;
use logging::LogLevel;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "lpp", version, about = "lpp - scan lpp source into tokens")]
struct Cli {
    /// Source files to tokenize. Starts the interactive loop when empty.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print tokens and diagnostics as JSON, one document per file.
    #[arg(long)]
    json: bool,

    /// Prompt shown by the interactive loop.
    #[arg(long, default_value = repl::DEFAULT_PROMPT)]
    prompt: String,

    /// Log verbosity. `LPP_LOG` overrides it.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Render diagnostics as plain lines even on a terminal.
    #[arg(long)]
    plain: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let result = if cli.files.is_empty() {
        run_repl(&cli).map(|()| 0)
    } else {
        run_files(&cli)
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            print_error(&err.to_string());
            process::exit(2);
        }
    }
}

fn run_repl(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::start(stdin.lock(), &mut stdout, &cli.prompt)
}

/// Returns 1 when any file contained an invalid character.
fn run_files(cli: &Cli) -> Result<i32, CliError> {
    let scanned = files::scan_files(&cli.files)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        files::print_json(&mut out, &scanned)?;
        out.flush()?;
    } else {
        files::print_tokens(&mut out, &scanned)?;
        out.flush()?;
        let fancy = !cli.plain && io::stderr().is_terminal();
        files::report_diagnostics(&scanned, fancy);
    }

    let failed = scanned.iter().any(files::ScannedFile::has_errors);
    Ok(if failed { 1 } else { 0 })
}

fn print_error(msg: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}
