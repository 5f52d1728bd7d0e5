//! Layout helpers and shared styles.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};
use tictactoe_engine::{Cell, Move, Player};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Splits the screen into title, body and status bars.
pub fn frame_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Body
            Constraint::Length(3), // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Places an `n x n` grid of cells in the middle of `area`.
///
/// Cells that do not fit are clipped, so a tiny terminal gets partial cells
/// rather than a panic.
pub fn board_cells(area: Rect, n: usize) -> Vec<(Move, Rect)> {
    let side = u16::try_from(n).unwrap_or(u16::MAX);
    let grid = center_rect(
        area,
        CELL_WIDTH.saturating_mul(side),
        CELL_HEIGHT.saturating_mul(side),
    );

    (0..n)
        .flat_map(|row| (0..n).map(move |column| Move::new(row, column)))
        .filter_map(|mv| {
            let column = u16::try_from(mv.column).unwrap_or(u16::MAX);
            let row = u16::try_from(mv.row).unwrap_or(u16::MAX);
            let x = grid.x.saturating_add(CELL_WIDTH.saturating_mul(column));
            let y = grid.y.saturating_add(CELL_HEIGHT.saturating_mul(row));
            let rect = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
            (!rect.is_empty()).then_some((mv, rect))
        })
        .collect()
}

/// Centers a `width x height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

/// Returns the glyph and style for a cell.
pub fn cell_style(cell: Cell) -> (&'static str, Style) {
    match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

/// Style of the title bar.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style of the help line.
pub fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_cells_are_centered_and_disjoint() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = board_cells(area, 3);
        assert_eq!(cells.len(), 9);

        let (first, rect) = cells[0];
        assert_eq!(first, Move::new(0, 0));
        assert_eq!(rect.x, (80 - 21) / 2);
        assert_eq!(rect.y, (24 - 9) / 2);

        for (i, (_, a)) in cells.iter().enumerate() {
            for (_, b) in cells.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }

    #[test]
    fn test_board_cells_clip_to_small_area() {
        let area = Rect::new(0, 0, 10, 4);
        let cells = board_cells(area, 3);
        assert!(cells.iter().all(|(_, rect)| area.contains(rect.as_position())));
        assert!(cells.len() < 9);
    }
}
