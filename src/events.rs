//! Event handling functions for the terminal interface.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::trace;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{Command, Direction},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Handles a single key press.
///
/// While the game is running the key is decoded with [`command_for`] and applied to the maze. Once
/// the player has won, any key closes the interface.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if app.outcome.is_terminal() {
        trace!("{code:?} pressed on the final screen");
        app.exit = true;
        return;
    }

    let _ = app.apply(command_for(code));
}

/// Maps a key to the command it stands for.
///
/// Arrow keys and the `k`, `j`, `h` and `l` keys move the player; `q` and Esc quit. Every other key
/// is ignored.
pub(crate) const fn command_for(code: KeyCode) -> Command {
    match code {
        KeyCode::Up | KeyCode::Char('k' | 'K') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'H') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L') => Command::Move(Direction::Right),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}
