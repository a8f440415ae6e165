//! Logger setup.
//!
//! Two line formats: coloured `LEVEL target: message` for terminals, and one
//! JSON object per line for log shippers.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// HTTP stack crates, capped at `info` so `--log-level debug` shows redirect
/// hops without connection-pool chatter.
const QUIET_MODULES: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Installs the global logger.
///
/// `RUST_LOG` is read first; `level` then applies to everything except the
/// HTTP stack.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=redirect_verifier=debug redirect_verifier map.csv --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, level.min(LevelFilter::Info));
    }

    match format {
        LogFormat::Plain => builder.format(write_plain),
        LogFormat::Json => builder.format(write_json),
    };

    builder.try_init()?;
    Ok(())
}

fn level_label(level: Level) -> ColoredString {
    let label = format!("{level:<5}");
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    }
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} {}: {}",
        level_label(record.level()),
        record.target().dimmed(),
        record.args()
    )
}

fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}
