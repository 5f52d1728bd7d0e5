//! Input decoding and cursor movement.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};
use tictactoe_engine::Move;
use tracing::{debug, instrument};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// A terminal event reduced to what the screens care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Arrow key.
    Navigate(Direction),
    /// Enter or space.
    Enter,
    /// Escape.
    Escape,
    /// `q` or Ctrl-C.
    Quit,
    /// Left mouse button pressed at a terminal cell.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
        /// Second press on the same cell within the double-click window.
        double: bool,
    },
}

/// Detects double clicks from a stream of single presses.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(Instant, u16, u16)>,
}

impl ClickTracker {
    /// Creates a tracker with the given double-click window.
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Registers a press and returns true if it completes a double click.
    ///
    /// A completed double click is consumed, so a third press starts over.
    pub fn register(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((at, c, r)) if c == column && r == row && now.duration_since(at) <= self.window
        );
        self.last = if double { None } else { Some((now, column, row)) };
        double
    }
}

/// Translates a crossterm event into an [`InputEvent`].
///
/// Key releases and unrelated events yield `None`.
#[instrument(skip(clicks))]
pub fn translate(event: &Event, clicks: &mut ClickTracker, now: Instant) -> Option<InputEvent> {
    let input = match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::Click {
            column: *column,
            row: *row,
            double: clicks.register(*column, *row, now),
        }),
        _ => None,
    };
    if let Some(input) = input {
        debug!(?input, "Decoded input");
    }
    input
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Up => Some(InputEvent::Navigate(Direction::Up)),
        KeyCode::Down => Some(InputEvent::Navigate(Direction::Down)),
        KeyCode::Left => Some(InputEvent::Navigate(Direction::Left)),
        KeyCode::Right => Some(InputEvent::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Moves the board cursor one cell, clamped at the edges of an `N x N` board.
pub fn move_cursor<const N: usize>(cursor: Move, direction: Direction) -> Move {
    let last = N.saturating_sub(1);
    match direction {
        Direction::Up => Move::new(cursor.row.saturating_sub(1), cursor.column),
        Direction::Down => Move::new((cursor.row + 1).min(last), cursor.column),
        Direction::Left => Move::new(cursor.row, cursor.column.saturating_sub(1)),
        Direction::Right => Move::new(cursor.row, (cursor.column + 1).min(last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_keys() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let now = Instant::now();
        assert_eq!(
            translate(&key(KeyCode::Up, KeyEventKind::Press), &mut clicks, now),
            Some(InputEvent::Navigate(Direction::Up))
        );
        assert_eq!(
            translate(&key(KeyCode::Enter, KeyEventKind::Press), &mut clicks, now),
            Some(InputEvent::Enter)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let event = key(KeyCode::Enter, KeyEventKind::Release);
        assert_eq!(translate(&event, &mut clicks, Instant::now()), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate(&event, &mut clicks, Instant::now()),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_double_click_within_window() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let start = Instant::now();
        assert_eq!(
            translate(&left_click(5, 7), &mut clicks, start),
            Some(InputEvent::Click {
                column: 5,
                row: 7,
                double: false
            })
        );
        assert_eq!(
            translate(
                &left_click(5, 7),
                &mut clicks,
                start + Duration::from_millis(200)
            ),
            Some(InputEvent::Click {
                column: 5,
                row: 7,
                double: true
            })
        );
    }

    #[test]
    fn test_slow_or_moved_clicks_are_single() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let start = Instant::now();
        assert!(!clicks.register(1, 1, start));
        assert!(!clicks.register(1, 1, start + Duration::from_millis(500)));
        assert!(!clicks.register(2, 1, start + Duration::from_millis(600)));
    }

    #[test]
    fn test_third_click_starts_over() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let start = Instant::now();
        assert!(!clicks.register(3, 3, start));
        assert!(clicks.register(3, 3, start + Duration::from_millis(100)));
        assert!(!clicks.register(3, 3, start + Duration::from_millis(200)));
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let corner = Move::new(0, 0);
        assert_eq!(move_cursor::<3>(corner, Direction::Up), corner);
        assert_eq!(move_cursor::<3>(corner, Direction::Left), corner);
        assert_eq!(
            move_cursor::<3>(Move::new(2, 2), Direction::Down),
            Move::new(2, 2)
        );
        assert_eq!(
            move_cursor::<3>(Move::new(2, 2), Direction::Right),
            Move::new(2, 2)
        );
    }

    #[test]
    fn test_cursor_moves_one_cell() {
        let center = Move::new(1, 1);
        assert_eq!(move_cursor::<3>(center, Direction::Up), Move::new(0, 1));
        assert_eq!(move_cursor::<3>(center, Direction::Down), Move::new(2, 1));
        assert_eq!(move_cursor::<3>(center, Direction::Left), Move::new(1, 0));
        assert_eq!(move_cursor::<3>(center, Direction::Right), Move::new(1, 2));
    }
}
