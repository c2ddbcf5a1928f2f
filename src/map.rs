//! Built-in maze data.
//!
//! This module contains the maze played when no description file is given on the command line.

use crate::{
    maze::{LoadError, Maze},
    types::Dimensions,
};

/// Default maze description at the reference size.
///
/// This constant holds a 19 by 39 labyrinth with the start in the top left corner and the goal in
/// the bottom right corner, written in the same token format as maze files.
pub(crate) const DEFAULT_MAZE: &str = "\
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1\n\
1 S 0 0 1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 1\n\
1 1 1 0 1 1 1 1 1 0 1 1 1 1 1 0 1 1 1 1 1 0 1 0 1 0 1 0 1 1 1 1 1 0 1 1 1 0 1\n\
1 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 0 0 1 0 1 0 1 0 1 0 0 0 0 0 1 0 0 0 1\n\
1 0 1 1 1 1 1 0 1 1 1 1 1 0 1 1 1 1 1 1 1 1 1 0 1 0 1 1 1 0 1 1 1 1 1 0 1 1 1\n\
1 0 0 0 0 0 1 0 1 0 0 0 1 0 1 0 0 0 0 0 1 0 0 0 1 0 0 0 0 0 1 0 0 0 1 0 1 0 1\n\
1 0 1 1 1 1 1 0 1 0 1 0 1 0 1 0 1 1 1 1 1 0 1 1 1 1 1 1 1 1 1 0 1 1 1 0 1 0 1\n\
1 0 0 0 1 0 0 0 1 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 1 0 0 0 1 0 1\n\
1 0 1 0 1 0 1 1 1 0 1 1 1 1 1 1 1 0 1 1 1 1 1 0 1 1 1 1 1 0 1 1 1 0 1 1 1 0 1\n\
1 0 1 0 1 0 0 0 1 0 1 0 1 0 0 0 0 0 1 0 0 0 1 0 1 0 0 0 1 0 0 0 0 0 1 0 0 0 1\n\
1 1 1 0 1 1 1 0 1 0 1 0 1 0 1 1 1 1 1 0 1 0 1 0 1 0 1 0 1 1 1 1 1 1 1 1 1 0 1\n\
1 0 0 0 1 0 0 0 1 0 0 0 1 0 0 0 1 0 1 0 1 0 1 0 1 0 1 0 0 0 0 0 0 0 0 0 1 0 1\n\
1 0 1 0 1 0 1 1 1 1 1 1 1 1 1 0 1 0 1 0 1 0 1 0 1 0 1 1 1 1 1 1 1 1 1 0 1 0 1\n\
1 0 1 0 1 0 1 0 0 0 0 0 0 0 1 0 1 0 0 0 1 0 1 0 0 0 1 0 0 0 0 0 0 0 1 0 0 0 1\n\
1 0 1 0 1 0 1 0 1 1 1 1 1 0 1 0 1 1 1 1 1 0 1 1 1 1 1 0 1 0 1 1 1 0 1 1 1 0 1\n\
1 0 1 0 1 0 1 0 1 0 0 0 1 0 1 0 0 0 1 0 0 0 0 0 1 0 0 0 1 0 1 0 0 0 1 0 0 0 1\n\
1 0 1 1 1 0 1 0 1 0 1 1 1 0 1 1 1 0 1 0 1 1 1 1 1 0 1 1 1 0 1 1 1 1 1 0 1 1 1\n\
1 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 G 1\n\
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1";

/// Loads the built-in maze.
///
/// # Errors
///
/// This function only fails if [`DEFAULT_MAZE`] stops matching the reference dimensions.
pub(crate) fn default_maze() -> Result<Maze, LoadError> {
    Maze::load(DEFAULT_MAZE, Dimensions::REFERENCE)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::types::{Direction, Position};

    /// Collects every cell reachable from the start without crossing a wall.
    fn reachable(maze: &Maze) -> HashSet<Position> {
        let mut seen = HashSet::from([maze.start_position()]);
        let mut queue = VecDeque::from([maze.start_position()]);

        while let Some(position) = queue.pop_front() {
            for direction in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                if let Some(next) = position.step(direction) {
                    if maze.is_open(next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        seen
    }

    #[test]
    fn test_default_maze_loads() {
        let maze = default_maze().expect("default maze should load");

        assert_eq!(maze.dimensions(), Dimensions::REFERENCE);
        assert_eq!(maze.start_position(), Position::new(1, 1));
        assert_eq!(maze.goal_position(), Position::new(17, 37));
        assert_eq!(maze.player_position(), maze.start_position());
    }

    #[test]
    fn test_default_maze_is_walled_in() {
        let maze = default_maze().expect("default maze should load");
        let Dimensions { height, width } = maze.dimensions();

        for col in 0..width {
            assert!(maze.is_blocked(Position::new(0, col)), "top edge at {col}");
            assert!(
                maze.is_blocked(Position::new(height - 1, col)),
                "bottom edge at {col}"
            );
        }
        for row in 0..height {
            assert!(maze.is_blocked(Position::new(row, 0)), "left edge at {row}");
            assert!(
                maze.is_blocked(Position::new(row, width - 1)),
                "right edge at {row}"
            );
        }
    }

    #[test]
    fn test_default_maze_goal_reachable() {
        let maze = default_maze().expect("default maze should load");

        assert!(
            reachable(&maze).contains(&maze.goal_position()),
            "the goal should be reachable from the start"
        );
    }
}
