//! Type definitions for grid coordinates, move commands, move outcomes and display glyphs.

use std::fmt;

/// Size of a maze grid.
///
/// This structure holds the number of rows and columns every maze description must provide. The
/// default value corresponds to the reference maze size of 19 rows by 39 columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows in the grid.
    pub height: usize,
    /// Number of columns in the grid.
    pub width: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}x{}", self.height, self.width)
    }
}

impl Dimensions {
    /// Reference maze size used when no other size is configured.
    pub const REFERENCE: Self = Self::new(19, 39);

    /// Builds a new set of dimensions from a height and a width.
    #[must_use]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Checks whether a position lies inside a grid of these dimensions.
    #[must_use]
    pub const fn contains(self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }
}

/// Zero-indexed grid coordinate.
///
/// This structure identifies a single cell in the maze by its row and column. Ordering and
/// equality follow the row first, which matches the row-major order in which mazes are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top of the grid.
    pub row: usize,
    /// Column index, counted from the left of the grid.
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

impl Position {
    /// Builds a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Computes the neighbouring position one step towards the given direction.
    ///
    /// Returns [`None`] when the step would leave the grid through its top or left edge. Steps
    /// through the bottom or right edge are not caught here because the grid size is not known;
    /// callers check those against [`Dimensions::contains`].
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();

        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta) else {
            return None;
        };

        Some(Self { row, col })
    }
}

/// Cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Returns the `(row, col)` offset this direction applies to a position.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A single decoded player command.
///
/// This enumeration is the tagged mapping from the leading character of a line of player input to
/// the action it requests. Anything that is not a recognised move or quit request decodes to
/// [`Command::Ignore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Attempt to move the player one cell.
    Move(Direction),
    /// End the game without reaching the goal.
    Quit,
    /// Empty or unrecognised input.
    Ignore,
}

impl Command {
    /// Decodes a line of player input.
    ///
    /// Only the first non-whitespace character matters and its case is ignored, so `"u"`,
    /// `"Up"` and `"  upwards"` all decode to the same move.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input
            .trim_start()
            .chars()
            .next()
            .map(|first| first.to_ascii_lowercase())
        {
            Some('u') => Self::Move(Direction::Up),
            Some('d') => Self::Move(Direction::Down),
            Some('l') => Self::Move(Direction::Left),
            Some('r') => Self::Move(Direction::Right),
            Some('q') => Self::Quit,
            _ => Self::Ignore,
        }
    }
}

/// Result of applying one command to the maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game goes on.
    #[default]
    Continue,
    /// The player stands on the goal cell.
    Won,
    /// The player asked to leave the game.
    Quit,
}

impl Outcome {
    /// Checks whether the outcome ends the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Quit)
    }
}

/// Display symbol for a single cell of a rendered frame.
///
/// The variants are listed in precedence order: when a cell qualifies for more than one of them,
/// the first one listed is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The player's current cell.
    Player,
    /// The cell the player started from.
    Start,
    /// The cell the player must reach.
    Goal,
    /// A cell the player has entered at least once.
    Trail,
    /// An impassable cell.
    Wall,
    /// An open cell that has not been entered.
    Open,
}

impl Glyph {
    /// Returns the character used to draw the glyph in text output.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Player => '@',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Trail => '.',
            Self::Wall => 'X',
            Self::Open => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse_directions() {
        assert_eq!(Command::parse("up"), Command::Move(Direction::Up));
        assert_eq!(Command::parse("down"), Command::Move(Direction::Down));
        assert_eq!(Command::parse("left"), Command::Move(Direction::Left));
        assert_eq!(Command::parse("right"), Command::Move(Direction::Right));
    }

    #[test]
    fn test_command_parse_only_reads_first_character() {
        assert_eq!(Command::parse("upside"), Command::Move(Direction::Up));
        assert_eq!(Command::parse("r"), Command::Move(Direction::Right));
        assert_eq!(Command::parse("Duck"), Command::Move(Direction::Down));
    }

    #[test]
    fn test_command_parse_quit_any_case() {
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn test_command_parse_ignores_unknown_and_empty() {
        assert_eq!(Command::parse(""), Command::Ignore);
        assert_eq!(Command::parse("   "), Command::Ignore);
        assert_eq!(Command::parse("north"), Command::Ignore);
        assert_eq!(Command::parse("?"), Command::Ignore);
    }

    #[test]
    fn test_command_parse_skips_leading_whitespace() {
        assert_eq!(Command::parse("  left"), Command::Move(Direction::Left));
        assert_eq!(Command::parse("\tq"), Command::Quit);
    }

    #[test]
    fn test_position_step_within_grid() {
        let origin = Position::new(3, 4);

        assert_eq!(origin.step(Direction::Up), Some(Position::new(2, 4)));
        assert_eq!(origin.step(Direction::Down), Some(Position::new(4, 4)));
        assert_eq!(origin.step(Direction::Left), Some(Position::new(3, 3)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(3, 5)));
    }

    #[test]
    fn test_position_step_underflow() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_dimensions_contains() {
        let dimensions = Dimensions::new(3, 5);

        assert!(dimensions.contains(Position::new(2, 4)), "last cell is inside");
        assert!(!dimensions.contains(Position::new(3, 0)), "row past the end");
        assert!(!dimensions.contains(Position::new(0, 5)), "column past the end");
    }

    #[test]
    fn test_dimensions_default_is_reference() {
        assert_eq!(Dimensions::default(), Dimensions::new(19, 39));
        assert_eq!(format!("{}", Dimensions::default()), "19x39");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Continue.is_terminal(), "continue keeps playing");
        assert!(Outcome::Won.is_terminal(), "winning ends the game");
        assert!(Outcome::Quit.is_terminal(), "quitting ends the game");
    }

    #[test]
    fn test_glyph_symbols() {
        let symbols: String = [
            Glyph::Player,
            Glyph::Start,
            Glyph::Goal,
            Glyph::Trail,
            Glyph::Wall,
            Glyph::Open,
        ]
        .into_iter()
        .map(Glyph::symbol)
        .collect();

        assert_eq!(symbols, "@SG.X ");
    }
}
