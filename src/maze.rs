//! Maze state and move handling.
//!
//! This module contains the [`Maze`] structure, which owns the grid of walls, the trail of visited
//! cells and the player, start and goal positions. It turns maze descriptions into state and
//! applies player commands to that state.

use std::{io, path::PathBuf};

use log::{debug, trace, warn};
use thiserror::Error;

use crate::types::{Command, Dimensions, Direction, Glyph, Outcome, Position};

/// Errors raised while loading a maze description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze description could not be read from storage.
    #[error("maze file `{}` could not be read", .path.display())]
    MazeFileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying read failure.
        source: io::Error,
    },
    /// The description does not hold one token per cell.
    #[error("maze should be {expected} cells, but the description has {found} tokens")]
    MazeDimensionMismatch {
        /// Size every description is expected to have.
        expected: Dimensions,
        /// Number of tokens in the description.
        found: usize,
    },
    /// A cell holds a symbol other than `0`, `1`, `S` or `G`.
    #[error("unexpected symbol '{symbol}' at row {row}, col {col}")]
    MalformedMaze {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Symbol found in the cell.
        symbol: char,
    },
}

/// Game state of one maze session.
///
/// This structure holds the maze grid together with everything that changes while playing it. The
/// grid shape and the start and goal positions are fixed once loaded; only the player position,
/// the trail of visited cells and the move counter change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Size of the grid.
    dimensions: Dimensions,
    /// Impassable cells, indexed by row and then column.
    blocked: Vec<Vec<bool>>,
    /// Cells the player has moved into, indexed by row and then column.
    visited: Vec<Vec<bool>>,
    /// Current player location.
    player: Position,
    /// Location the player started from.
    start: Position,
    /// Location the player has to reach.
    goal: Position,
    /// Number of direction commands applied, whether or not they moved the player.
    moves: usize,
}

impl Maze {
    /// Builds a maze from a textual description.
    ///
    /// The description is a stream of whitespace-separated tokens read in row-major order; line
    /// breaks carry no meaning, so a maze may sit on a single line or wrap anywhere. The first
    /// character of each token decides the cell: `1` is a wall, `0` is open, `S` is the open start
    /// cell and `G` is the open goal cell. When several `S` or `G` tokens are present the last one
    /// read wins; when one is missing its position stays at the top left corner.
    ///
    /// # Errors
    ///
    /// - [`LoadError::MazeDimensionMismatch`] if the description does not hold exactly
    ///   `dimensions.height * dimensions.width` tokens, or if either dimension is zero.
    /// - [`LoadError::MalformedMaze`] for the first token, in row-major order, that does not start
    ///   with a known symbol.
    pub fn load(description: &str, dimensions: Dimensions) -> Result<Self, LoadError> {
        let tokens: Vec<&str> = description.split_whitespace().collect();
        let cells = dimensions.height.saturating_mul(dimensions.width);

        if cells == 0 || tokens.len() != cells {
            return Err(LoadError::MazeDimensionMismatch {
                expected: dimensions,
                found: tokens.len(),
            });
        }

        let mut blocked = vec![vec![false; dimensions.width]; dimensions.height];
        let mut start = None;
        let mut goal = None;

        for (row, (row_tokens, row_cells)) in tokens
            .chunks(dimensions.width)
            .zip(blocked.iter_mut())
            .enumerate()
        {
            for (col, (token, cell)) in row_tokens.iter().zip(row_cells.iter_mut()).enumerate() {
                let position = Position::new(row, col);

                match token.chars().next().unwrap_or_default() {
                    '1' => *cell = true,
                    '0' => *cell = false,
                    'S' => {
                        *cell = false;
                        if let Some(previous) = start.replace(position) {
                            warn!("start marker at {position} replaces the one at {previous}");
                        }
                    }
                    'G' => {
                        *cell = false;
                        if let Some(previous) = goal.replace(position) {
                            warn!("goal marker at {position} replaces the one at {previous}");
                        }
                    }
                    symbol => return Err(LoadError::MalformedMaze { row, col, symbol }),
                }
            }
        }

        if start.is_none() {
            warn!("maze has no start marker, the player starts at the top left corner");
        }
        if goal.is_none() {
            warn!("maze has no goal marker, the goal is the top left corner");
        }

        let start = start.unwrap_or_default();
        let goal = goal.unwrap_or_default();
        debug!("loaded {dimensions} maze with start {start} and goal {goal}");

        Ok(Self {
            dimensions,
            blocked,
            visited: vec![vec![false; dimensions.width]; dimensions.height],
            player: start,
            start,
            goal,
            moves: 0,
        })
    }

    /// Returns the size of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns where the player currently stands.
    #[must_use]
    pub const fn player_position(&self) -> Position {
        self.player
    }

    /// Returns where the player started.
    #[must_use]
    pub const fn start_position(&self) -> Position {
        self.start
    }

    /// Returns the cell the player has to reach.
    #[must_use]
    pub const fn goal_position(&self) -> Position {
        self.goal
    }

    /// Returns how many direction commands have been applied so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Checks whether the player stands on the goal.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.player == self.goal
    }

    /// Checks whether a cell is a wall. Positions outside the grid are reported as not blocked.
    #[must_use]
    pub fn is_blocked(&self, position: Position) -> bool {
        lookup(&self.blocked, position)
    }

    /// Checks whether the player has ever moved into a cell. Positions outside the grid are
    /// reported as not visited.
    #[must_use]
    pub fn is_visited(&self, position: Position) -> bool {
        lookup(&self.visited, position)
    }

    /// Checks whether the player may stand on a cell, which requires it to be inside the grid and
    /// not be a wall.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.dimensions.contains(position) && !self.is_blocked(position)
    }

    /// Borrows the wall matrix, indexed by row and then column.
    #[must_use]
    pub fn blocked(&self) -> &[Vec<bool>] {
        &self.blocked
    }

    /// Borrows the visited matrix, indexed by row and then column.
    #[must_use]
    pub fn visited(&self) -> &[Vec<bool>] {
        &self.visited
    }

    /// Returns an independent copy of the wall matrix.
    #[must_use]
    pub fn snapshot_blocked(&self) -> Vec<Vec<bool>> {
        self.blocked.clone()
    }

    /// Returns an independent copy of the visited matrix.
    #[must_use]
    pub fn snapshot_visited(&self) -> Vec<Vec<bool>> {
        self.visited.clone()
    }

    /// Decodes a line of player input and applies it.
    ///
    /// See [`Command::parse`] for how the line is read and [`Maze::apply`] for what happens next.
    pub fn apply_move(&mut self, input: &str) -> Outcome {
        self.apply(Command::parse(input))
    }

    /// Applies one command to the maze.
    ///
    /// A quit request ends the game on the spot and an ignored command changes nothing. A move
    /// into an open cell inside the grid relocates the player and marks the cell visited; a move
    /// into a wall or off the grid leaves the player where it was. Either way, the move counts and
    /// the result is [`Outcome::Won`] if the player is now on the goal.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let direction = match command {
            Command::Move(direction) => direction,
            Command::Quit => {
                debug!("quit requested at {}", self.player);
                return Outcome::Quit;
            }
            Command::Ignore => {
                trace!("ignored command at {}", self.player);
                return Outcome::Continue;
            }
        };

        self.moves += 1;
        self.step(direction);

        if self.has_won() {
            debug!("goal reached after {} moves", self.moves);
            Outcome::Won
        } else {
            Outcome::Continue
        }
    }

    /// Moves the player one cell if the target is open.
    fn step(&mut self, direction: Direction) {
        let Some(target) = self
            .player
            .step(direction)
            .filter(|target| self.is_open(*target))
        else {
            trace!("move {direction:?} from {} absorbed", self.player);
            return;
        };

        if let Some(cell) = self
            .visited
            .get_mut(target.row)
            .and_then(|cells| cells.get_mut(target.col))
        {
            *cell = true;
        }
        trace!("player moved {direction:?} to {target}");
        self.player = target;
    }

    /// Returns the glyph shown for a cell.
    ///
    /// The player is drawn above the start, the start above the goal, the goal above the trail and
    /// the trail above walls.
    #[must_use]
    pub fn glyph_at(&self, position: Position) -> Glyph {
        if position == self.player {
            Glyph::Player
        } else if position == self.start {
            Glyph::Start
        } else if position == self.goal {
            Glyph::Goal
        } else if self.is_visited(position) {
            Glyph::Trail
        } else if self.is_blocked(position) {
            Glyph::Wall
        } else {
            Glyph::Open
        }
    }

    /// Computes the glyphs of every cell, one vector per row.
    #[must_use]
    pub fn frame(&self) -> Vec<Vec<Glyph>> {
        (0..self.dimensions.height)
            .map(|row| {
                (0..self.dimensions.width)
                    .map(|col| self.glyph_at(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

/// Reads a cell of a boolean matrix, treating positions outside it as `false`.
fn lookup(grid: &[Vec<bool>], position: Position) -> bool {
    grid.get(position.row)
        .and_then(|cells| cells.get(position.col))
        .copied()
        .unwrap_or(false)
}
