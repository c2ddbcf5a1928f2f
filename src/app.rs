//! Game loop driving a maze session.

use std::io;

use color_eyre::eyre::Result;
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::{
    events,
    input::Source,
    maze::Maze,
    render::Sink,
    types::{Command, Outcome},
    ui,
};

/// Application state container for one game.
///
/// This structure holds the maze being played together with the outcome of the last command, and
/// runs the render, read, apply cycle until the game ends.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set once nothing else is left to show. For the line prompt that is as soon as
    /// the game ends; the terminal interface keeps the final screen up until a key is pressed.
    pub(crate) exit: bool,
    /// Maze being played.
    pub(crate) maze: Maze,
    /// Outcome of the most recent command.
    pub(crate) outcome: Outcome,
}

impl App {
    /// Starts a new game on a freshly loaded maze.
    #[must_use]
    pub const fn new(maze: Maze) -> Self {
        Self {
            exit: false,
            maze,
            outcome: Outcome::Continue,
        }
    }

    /// Borrows the maze being played.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the outcome of the most recent command.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Applies one command and records its outcome.
    pub(crate) fn apply(&mut self, command: Command) -> Outcome {
        self.outcome = self.maze.apply(command);
        debug!(
            "{command:?} -> {:?} at {}",
            self.outcome,
            self.maze.player_position()
        );

        if self.outcome == Outcome::Quit {
            self.exit = true;
        }

        self.outcome
    }

    /// Runs the game with a line-oriented source and sink.
    ///
    /// Every turn the sink is shown the current frame, one line is read from the source and the
    /// command it holds is applied. The loop stops when the player wins or quits, or when the source
    /// runs dry, which counts as quitting. The sink is then handed the closing message.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source or the sink.
    pub fn run<I: Source, O: Sink>(&mut self, source: &mut I, sink: &mut O) -> Result<Outcome> {
        while !self.outcome.is_terminal() {
            sink.present(&self.maze.frame())?;

            let Some(line) = source.next_line()? else {
                info!("input closed, leaving the game");
                let _ = self.apply(Command::Quit);
                break;
            };
            let _ = self.apply(Command::parse(&line));
        }

        self.exit = true;
        self.finish();
        sink.conclude(self.maze.has_won())?;

        Ok(self.outcome)
    }

    /// Runs the game in the full-screen terminal interface.
    ///
    /// This function redraws the maze and handles key presses until the exit condition is `true`,
    /// after which the function returns to the call site and the caller restores the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run_tui(&mut self, terminal: &mut DefaultTerminal) -> Result<Outcome> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        self.finish();

        Ok(self.outcome)
    }

    /// Logs how the game ended.
    fn finish(&self) {
        info!(
            "game over: {:?} after {} moves at {}",
            self.outcome,
            self.maze.moves(),
            self.maze.player_position()
        );
    }
}
