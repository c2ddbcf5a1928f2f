//! Log output setup.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Installs the global logger.
///
/// Standard output carries the game itself, so records are only written when a log file is
/// given. Without one, the logging macros used across the crate stay silent.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or a logger was already
/// installed.
pub(crate) fn init(level: LevelFilter, path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    info!("logging at level {level} to {}", path.display());

    Ok(())
}
