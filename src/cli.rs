//! Command-line configuration.

use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, Parser};
use simplelog::LevelFilter;

use crate::types::Dimensions;

/// Command-line arguments of the game.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Maze description file to play. The built-in maze is played when omitted.
    pub maze: Option<PathBuf>,
    /// Number of rows the maze file must have.
    #[arg(
        long,
        default_value_t = Dimensions::REFERENCE.height,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    pub height: usize,
    /// Number of columns the maze file must have.
    #[arg(
        long,
        default_value_t = Dimensions::REFERENCE.width,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    pub width: usize,
    /// Play in a full-screen terminal interface instead of the line prompt.
    #[arg(long)]
    pub tui: bool,
    /// File to write log records to. Nothing is logged when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Most verbose log level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    /// Returns the maze size requested on the command line.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.height, self.width)
    }
}
