use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LogError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn config() -> Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Log to a file. Used while the TUI owns the terminal.
pub fn init_file(path: &Path, level: LevelFilter) -> Result<(), LogError> {
    let file = File::create(path)?;
    WriteLogger::init(level, config(), file)?;
    Ok(())
}

/// Log to stderr. Used by the plain text front end.
pub fn init_term(level: LevelFilter) -> Result<(), LogError> {
    TermLogger::init(level, config(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
