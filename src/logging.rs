//! Logger setup
//!
//! The TUI owns the terminal, so in that mode everything goes to the log file.
//! Headless runs also echo to stderr.

use crate::errors::SetupError;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Install the global logger
pub fn init(path: &Path, verbose: bool, echo: bool) -> Result<(), SetupError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let file = File::create(path).map_err(|e| SetupError::Logger {
        message: format!("{}: {}", path.display(), e),
    })?;

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(WriteLogger::new(level, config.clone(), file));
    if echo {
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| SetupError::Logger {
        message: e.to_string(),
    })
}
