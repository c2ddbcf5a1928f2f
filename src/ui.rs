//! User interface rendering for the full-screen terminal mode.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    maze::Maze,
    render::FAREWELL_MESSAGE,
    types::{Glyph, Outcome},
    App,
};

/// Key help shown while the game is running.
const CONTROLS: &str = "(k) up / (j) down / (h) left / (l) right / (q) quit";

/// Draws the in-game screen.
///
/// This function renders the maze inside a bordered block centered in the terminal, with a tooltip
/// bar at the bottom holding the move count and either the controls or the closing message.
///
/// # Errors
///
/// This function may return errors from layout retrieval or if the maze is too large to be
/// measured in terminal cells.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let dimensions = app.maze.dimensions();
    let maze_area = centered(
        maze_content_area,
        u16::try_from(dimensions.width)?.saturating_add(2),
        u16::try_from(dimensions.height)?.saturating_add(2),
    )?;

    let maze_block = Block::bordered()
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    frame.render_widget(Paragraph::new(maze_lines(&app.maze)).block(maze_block), maze_area);

    let tooltip_block = Block::bordered()
        .title(format!("{} / moves: {}", tooltip(app.outcome), app.maze.moves()))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Computes a rectangle of the given size centered inside an area.
///
/// The size is clamped to the area, and when the leftover space cannot be split evenly the
/// rounding of the halved margin decides which side gets the extra cell.
///
/// # Errors
///
/// This function may return errors if a computed margin does not fit in a terminal coordinate.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let left = rounded_div::i32(i32::from(area.width - width), 2);
    let top = rounded_div::i32(i32::from(area.height - height), 2);

    Ok(Rect::new(
        area.x.saturating_add(u16::try_from(left)?),
        area.y.saturating_add(u16::try_from(top)?),
        width,
        height,
    ))
}

/// Builds one styled line per maze row.
pub(crate) fn maze_lines(maze: &Maze) -> Vec<Line<'static>> {
    maze.frame()
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|glyph| Span::styled(glyph.symbol().to_string(), glyph_style(*glyph)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Returns the style a glyph is drawn with.
pub(crate) fn glyph_style(glyph: Glyph) -> Style {
    match glyph {
        Glyph::Player => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Glyph::Start | Glyph::Goal => Style::default().fg(Color::Yellow),
        Glyph::Trail => Style::default().fg(Color::Red),
        Glyph::Wall => Style::default().fg(Color::Green),
        Glyph::Open => Style::default(),
    }
}

/// Returns the tooltip text for the state of the game.
pub(crate) const fn tooltip(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Continue => CONTROLS,
        Outcome::Won => "You Won! (any key) exit",
        Outcome::Quit => FAREWELL_MESSAGE,
    }
}
