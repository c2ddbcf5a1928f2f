//! Text-rendered maze game.
//!
//! A maze is loaded from a grid description of walls (`1`), open cells (`0`), one start (`S`) and
//! one goal (`G`). The player walks from the start towards the goal one cell per command, and
//! every cell entered along the way is marked on the rendered maze. The game ends when the goal is
//! reached or the player quits.
//!
//! The [`Maze`] type holds all game rules. Reading commands and showing frames go through the
//! [`Source`] and [`Sink`] traits, so the same rules drive both the line prompt and the
//! full-screen terminal interface.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod file_loader;
mod input;
mod logging;
mod map;
mod maze;
mod render;
mod types;
mod ui;

use std::io;

use color_eyre::eyre::Result;
use log::{info, warn};

pub use crate::{
    app::App,
    cli::Args,
    file_loader::load_file,
    input::{LineSource, Source},
    maze::{LoadError, Maze},
    render::{closing_message, frame_text, Sink, TextSink, FAREWELL_MESSAGE, PROMPT, WIN_MESSAGE},
    types::{Command, Dimensions, Direction, Glyph, Outcome, Position},
};

/// Runs the game as configured on the command line.
///
/// This function installs the logger, loads the requested maze, or the built-in one when no file
/// is given, and plays it until the player wins or quits. In terminal interface mode the terminal
/// is restored before the closing message is printed to standard output.
///
/// # Errors
///
/// - [`LoadError`] if the maze cannot be loaded.
/// - [`std::io::Error`] if reading input or writing output fails.
pub fn run(args: &Args) -> Result<()> {
    logging::init(args.log_level, args.log_file.as_deref())?;

    let maze = if let Some(path) = &args.maze {
        load_file(path, args.dimensions())?
    } else {
        if args.dimensions() != Dimensions::REFERENCE {
            warn!(
                "ignoring requested size {} for the built-in {} maze",
                args.dimensions(),
                Dimensions::REFERENCE
            );
        }
        map::default_maze()?
    };

    let mut app = App::new(maze);

    let outcome = if args.tui {
        let mut terminal = ratatui::init();
        let result = app.run_tui(&mut terminal);
        ratatui::restore();

        let outcome = result?;
        TextSink::new(io::stdout()).conclude(app.maze().has_won())?;
        outcome
    } else {
        app.run(
            &mut LineSource::new(io::stdin().lock()),
            &mut TextSink::new(io::stdout()),
        )?
    };

    info!("session finished with {outcome:?}");

    Ok(())
}
