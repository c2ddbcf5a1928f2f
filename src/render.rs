//! Plain-text output sinks.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::types::Glyph;

/// Prompt printed after every frame.
pub const PROMPT: &str = "Enter your move (up, down, left, right, or q to quit): ";

/// Line printed when the game ends with the player on the goal.
pub const WIN_MESSAGE: &str = "You Won!";

/// Line printed when the game ends any other way.
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Receiver of rendered game frames.
pub trait Sink {
    /// Shows one frame of the maze and asks the player for a move.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing the frame out.
    fn present(&mut self, frame: &[Vec<Glyph>]) -> Result<()>;

    /// Shows the closing message once the game has ended.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing the message out.
    fn conclude(&mut self, won: bool) -> Result<()>;
}

/// Formats a frame as a bordered block of text.
///
/// The block starts and ends with a `*---*` border as wide as the frame, and every row is wrapped
/// in `|` characters. Every line, the last one included, ends with a newline.
#[must_use]
pub fn frame_text(frame: &[Vec<Glyph>]) -> String {
    let width = frame.first().map_or(0, Vec::len);
    let border = format!("*{}*\n", "-".repeat(width));

    let mut text = border.clone();
    for row in frame {
        text.push('|');
        text.extend(row.iter().map(|glyph| glyph.symbol()));
        text.push_str("|\n");
    }
    text.push_str(&border);

    text
}

/// Returns the closing message for a finished game.
#[must_use]
pub const fn closing_message(won: bool) -> &'static str {
    if won {
        WIN_MESSAGE
    } else {
        FAREWELL_MESSAGE
    }
}

/// [`Sink`] writing plain text to any writer.
#[derive(Debug)]
pub struct TextSink<W> {
    /// Destination of the rendered text.
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwraps the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn present(&mut self, frame: &[Vec<Glyph>]) -> Result<()> {
        self.writer.write_all(frame_text(frame).as_bytes())?;
        self.writer.write_all(PROMPT.as_bytes())?;
        self.writer.flush()?;

        Ok(())
    }

    fn conclude(&mut self, won: bool) -> Result<()> {
        writeln!(self.writer, "{}", closing_message(won))?;
        self.writer.flush()?;

        Ok(())
    }
}
