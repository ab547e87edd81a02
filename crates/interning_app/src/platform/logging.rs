//! Platform logging initialization for the interning app.
//!
//! Logs go to the configured file by default so they do not interleave with
//! the dashboard on stdout.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::config::{AppConfig, LogDestination};

/// Initialize the logger from the app configuration.
///
/// An unknown level name falls back to `info`.
pub fn initialize(config: &AppConfig) {
    let level = engine_logging::parse_level(&config.log_level).unwrap_or(LevelFilter::Info);
    let log_config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match config.log_destination {
        LogDestination::File => {
            if let Some(file_logger) = create_file_logger(&config.log_file, level, log_config) {
                vec![file_logger]
            } else {
                return;
            }
        }
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                log_config,
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                log_config.clone(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(&config.log_file, level, log_config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
