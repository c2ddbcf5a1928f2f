//! Player input sources.

use std::io::BufRead;

use color_eyre::eyre::Result;

/// Supplier of player commands, one line of text per request.
///
/// Implementors hand over raw lines; decoding them into commands is left to the maze.
pub trait Source {
    /// Waits for the next line of input.
    ///
    /// Returns [`None`] once the input is exhausted. The trailing line terminator is removed.
    ///
    /// # Errors
    ///
    /// Returns any error raised while reading the underlying input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Line-oriented [`Source`] over any buffered reader.
#[derive(Debug)]
pub struct LineSource<R> {
    /// Reader lines are taken from.
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Source for LineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);

        Ok(Some(line))
    }
}
