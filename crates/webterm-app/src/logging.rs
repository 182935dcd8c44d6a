//! Logger and panic-hook setup for a raw-mode session.
//!
//! stderr is the same tty the terminal draws on, so nothing may be written
//! there while the session runs. Log records go to the file named by
//! `WEBTERM_LOG`, or nowhere when it is unset. Panic reports (including the
//! ones dispatch recovers from) are routed through the logger.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::LevelFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "WEBTERM_LOG";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Logging disabled.
    Off,
    /// Append to this file. `RUST_LOG` applies, default `info`.
    File(PathBuf),
}

impl LogSink {
    /// Read the sink from the value of [`LOG_FILE_ENV`]. Unset or empty is
    /// [`LogSink::Off`].
    pub fn from_setting(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Off,
        }
    }
}

/// Install the global logger for `sink`.
pub fn init(sink: &LogSink) -> Result<()> {
    let mut builder = match sink {
        LogSink::Off => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        },
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        },
    };
    builder.try_init().context("failed to install logger")?;
    Ok(())
}

/// Replace the default panic hook, which prints to stderr, with one that
/// logs the report.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log::error!("{info}");
    }));
}
