//! Logging setup for the `lpp` binary.
//!
//! Library crates only emit `tracing` events; the subscriber lives here.
//! `LPP_LOG` (an `EnvFilter` directive such as `lpp_scanner=trace`) takes
//! precedence over `--log-level`.

use clap::ValueEnum;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "LPP_LOG";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Install the stderr subscriber. `[LEVEL] message`, no timestamps.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.into()).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}
