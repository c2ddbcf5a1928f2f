//! File loading for maze description files.

use std::{fs, path::Path};

use log::info;

use crate::{
    maze::{LoadError, Maze},
    types::Dimensions,
};

/// Reads a maze description file and loads it.
///
/// This function reads the whole file into memory and hands its contents to [`Maze::load`]. Any
/// failure to read the file, whether it is missing, unreadable or not valid UTF-8, is reported as
/// a missing maze file.
///
/// # Errors
///
/// - [`LoadError::MazeFileNotFound`] if the file cannot be read.
/// - Any error returned by [`Maze::load`] for the file contents.
pub fn load_file(path: &Path, dimensions: Dimensions) -> Result<Maze, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::MazeFileNotFound {
        path: path.to_owned(),
        source,
    })?;

    let maze = Maze::load(&contents, dimensions)?;
    info!("loaded maze from {}", path.display());

    Ok(maze)
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use super::*;
    use crate::types::Position;

    /// Writes a maze description to a file unique to the calling test.
    fn write_maze(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("labyrintrek-{}-{name}.maze", process::id()));
        fs::write(&path, contents).expect("failed to write test maze file");
        path
    }

    #[test]
    fn test_load_file_valid() {
        let path = write_maze("valid", "0 0 0\n1 0 1\nS 0 G\n");

        let result = load_file(&path, Dimensions::new(3, 3));
        fs::remove_file(&path).expect("failed to remove test maze file");

        let maze = result.expect("valid maze file should load");
        assert_eq!(maze.start_position(), Position::new(2, 0));
        assert_eq!(maze.goal_position(), Position::new(2, 2));
    }

    #[test]
    fn test_load_file_missing() {
        let path = env::temp_dir().join("labyrintrek-this-file-does-not-exist.maze");

        let result = load_file(&path, Dimensions::new(3, 3));

        match result {
            Err(LoadError::MazeFileNotFound { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a missing file error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_file_wrong_size() {
        let path = write_maze("narrow", "0 0\n1 0\nS G\n");

        let result = load_file(&path, Dimensions::new(3, 3));
        fs::remove_file(&path).expect("failed to remove test maze file");

        assert!(
            matches!(result, Err(LoadError::MazeDimensionMismatch { .. })),
            "a 3x2 file should not load as 3x3"
        );
    }

    #[test]
    fn test_load_file_malformed() {
        let path = write_maze("malformed", "0 0 0\n1 ? 1\nS 0 G\n");

        let result = load_file(&path, Dimensions::new(3, 3));
        fs::remove_file(&path).expect("failed to remove test maze file");

        assert!(
            matches!(
                result,
                Err(LoadError::MalformedMaze {
                    row: 1,
                    col: 1,
                    symbol: '?'
                })
            ),
            "question mark should be rejected"
        );
    }
}
