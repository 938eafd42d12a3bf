// File: ./src/logging.rs
//! Logger bootstrap for the binary.
//!
//! Installs a `simplelog` backend behind the `log` facade: stderr by default,
//! an append-only file when configured. Only the first call takes effect.
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

static ACTIVE_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

/// Accepts `off`, `error`, `warn`, `info`, `debug`, `trace` in any case.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| anyhow::anyhow!("Unsupported log level '{}'", level))
}

pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = parse_level(level)?;
    if let Some(active) = ACTIVE_LEVEL.get() {
        log::debug!("Logging already initialized at {}", active);
        return Ok(());
    }

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            WriteLogger::init(filter, ConfigBuilder::new().build(), file)
        }
        None => TermLogger::init(
            filter,
            ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    let _ = ACTIVE_LEVEL.set(filter);
    Ok(())
}
