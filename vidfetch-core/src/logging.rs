//! Centralized logging configuration for vidfetch
//!
//! Sets up console logging through `env_logger` with colored level tags and
//! provides a helper for logging external command invocations.

use colored::*;
use log::{debug, LevelFilter};
use std::io::Write;
use std::process::Command;

/// Initialize the logger for vidfetch
///
/// Sets up an env_logger with appropriate formatting and log level
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the logger with a specific log level
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            let level_colored = match record.level() {
                log::Level::Error => level_str.bright_red(),
                log::Level::Warn => level_str.yellow(),
                log::Level::Info => level_str.green(),
                log::Level::Debug => level_str.blue(),
                log::Level::Trace => level_str.magenta(),
            };

            writeln!(buf, "{} {}", level_colored, record.args())
        })
        .filter(None, level)
        .parse_default_env()
        .init();

    debug!("Logger initialized with level: {}", level);
}

/// Log a command being executed
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();

    debug!("Executing command: {} {}", program.cyan(), args.join(" ").blue());
}
