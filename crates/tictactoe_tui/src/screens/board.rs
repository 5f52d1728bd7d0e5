//! Board screen: cursor, marks, computer opponent and round results.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tictactoe_engine::{Engine, FirstAvailable, GameStatus, Move, Opponent, Player};
use tracing::{debug, info, instrument, warn};

use crate::BOARD_SIZE;
use crate::config::AppConfig;
use crate::input::{InputEvent, move_cursor};
use crate::screen::{Screen, ScreenTransition};
use crate::settings::PlayMode;
use crate::ui;

/// State for the board screen.
#[derive(Getters)]
pub struct BoardScreen {
    title: String,
    engine: Engine<BOARD_SIZE>,
    mode: PlayMode,
    cursor: Move,
    /// Side the human plays in vs COM.
    human: Player,
    #[getter(skip)]
    opponent: Box<dyn Opponent<BOARD_SIZE>>,
    #[getter(skip)]
    com_delay: Duration,
    /// When the computer is allowed to answer.
    com_due: Option<Instant>,
    #[getter(skip)]
    blink_interval: Duration,
    /// Whether the cursor is currently drawn highlighted.
    blink_on: bool,
    #[getter(skip)]
    blink_at: Instant,
    /// Cell rectangles from the last render, for hit testing.
    #[getter(skip)]
    cell_areas: Vec<(Move, Rect)>,
    /// Set when a click restarted the round, so the second press of that
    /// double click does not place a mark.
    #[getter(skip)]
    swallow_double: bool,
}

impl std::fmt::Debug for BoardScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardScreen")
            .field("mode", &self.mode)
            .field("cursor", &self.cursor)
            .field("status", &self.engine.status())
            .field("opponent", &self.opponent.name())
            .field("com_due", &self.com_due)
            .finish_non_exhaustive()
    }
}

impl BoardScreen {
    /// Creates an idle board with the built-in computer opponent.
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        Self::with_opponent(config, Box::new(FirstAvailable), now)
    }

    /// Creates an idle board with a custom computer opponent.
    #[instrument(skip(config, opponent, now), fields(opponent = opponent.name()))]
    pub fn with_opponent(
        config: &AppConfig,
        opponent: Box<dyn Opponent<BOARD_SIZE>>,
        now: Instant,
    ) -> Self {
        debug!("Initializing BoardScreen");
        Self {
            title: config.title().clone(),
            engine: Engine::new(),
            mode: PlayMode::OneVsOne,
            cursor: Self::center(),
            human: *config.human_mark(),
            opponent,
            com_delay: config.com_delay(),
            com_due: None,
            blink_interval: config.blink_interval(),
            blink_on: true,
            blink_at: now,
            cell_areas: Vec::new(),
            swallow_double: false,
        }
    }

    fn center() -> Move {
        Move::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
    }

    /// Opens a fresh round in `mode`.
    #[instrument(skip(self, now))]
    pub fn start(&mut self, mode: PlayMode, now: Instant) {
        info!(%mode, "Starting game");
        self.mode = mode;
        self.restart(now);
    }

    /// Clears the board and starts the next round in the same mode.
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        self.engine.reset();
        self.cursor = Self::center();
        self.blink_on = true;
        self.blink_at = now;
        self.com_due = None;
        self.swallow_double = false;
        self.schedule_com(now);
    }

    /// Side played by the computer, if any.
    pub fn com_side(&self) -> Option<Player> {
        self.mode.has_com().then(|| self.human.opponent())
    }

    /// Returns true while the computer owes a move.
    pub fn is_com_turn(&self) -> bool {
        !self.engine.is_over() && self.com_side() == Some(self.engine.to_move())
    }

    fn schedule_com(&mut self, now: Instant) {
        if self.is_com_turn() && self.com_due.is_none() {
            debug!(delay = ?self.com_delay, "Computer move scheduled");
            self.com_due = Some(now + self.com_delay);
        }
    }

    /// Places the current player's mark at `mv` on behalf of a human.
    ///
    /// Returns true if the move was accepted. Invalid cells and moves made
    /// while the computer is thinking are logged and ignored.
    #[instrument(skip(self, now))]
    pub fn place(&mut self, mv: Move, now: Instant) -> bool {
        if self.is_com_turn() {
            debug!("Ignoring human move during computer turn");
            return false;
        }
        if !self.engine.move_valid(mv) {
            warn!(%mv, "Rejected move on unavailable cell");
            return false;
        }
        match self.engine.play(mv) {
            Ok(status) => {
                info!(%mv, %status, "Human move placed");
                self.schedule_com(now);
                true
            }
            Err(error) => {
                warn!(%error, "Rejected move");
                false
            }
        }
    }

    fn play_com(&mut self) {
        let Some(side) = self.com_side() else {
            return;
        };
        match self.opponent.choose(&self.engine) {
            Some(mv) => match self.engine.move_set(mv, side) {
                Ok(()) => info!(%mv, opponent = self.opponent.name(), "Computer move placed"),
                Err(error) => warn!(%error, "Computer proposed an invalid move"),
            },
            None => warn!("Computer found no move"),
        }
    }

    /// Returns the board cell drawn at a terminal position.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Move> {
        let point = Position::new(column, row);
        self.cell_areas
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(mv, _)| *mv)
    }

    /// Text for the status bar.
    pub fn status_line(&self) -> String {
        match self.engine.status() {
            GameStatus::Won(player) => {
                format!("{player} wins! Enter/click: new round | Esc: menu")
            }
            GameStatus::Draw => "Draw! Enter/click: new round | Esc: menu".to_string(),
            GameStatus::InProgress if self.is_com_turn() => {
                format!("{} ({}) is thinking...", self.opponent.name(), self.engine.to_move())
            }
            GameStatus::InProgress => format!(
                "{} to move | Arrows: move | Enter/double-click: place | Esc: menu",
                self.engine.to_move()
            ),
        }
    }

    fn cell_border(&self, mv: Move) -> Style {
        let on_line = self
            .engine
            .winning_line()
            .is_some_and(|line| line.contains(&mv));
        if on_line {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if mv == self.cursor && self.blink_on && !self.engine.is_over() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame))]
    fn render(&mut self, frame: &mut Frame) {
        let [title_area, body, status_area] = ui::frame_chunks(frame.area());

        let title = Paragraph::new(format!("{} ({})", self.title, self.mode))
            .style(ui::title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        self.cell_areas = ui::board_cells(body, BOARD_SIZE);
        for &(mv, rect) in &self.cell_areas {
            let cell = self.engine.cell(mv).unwrap_or_default();
            let (glyph, style) = ui::cell_style(cell);
            let square = Paragraph::new(glyph)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.cell_border(mv)),
                );
            frame.render_widget(square, rect);
        }

        let status_style = if self.engine.is_over() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            ui::help_style()
        };
        let status = Paragraph::new(self.status_line())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, status_area);
    }

    #[instrument(skip(self, now))]
    fn handle_input(&mut self, input: InputEvent, now: Instant) -> ScreenTransition {
        match input {
            InputEvent::Escape => {
                self.engine.reset();
                self.com_due = None;
                ScreenTransition::ReturnToMenu
            }
            InputEvent::Quit => ScreenTransition::Quit,
            _ if self.engine.is_over() => {
                match input {
                    InputEvent::Enter => self.restart(now),
                    InputEvent::Click { .. } => {
                        self.restart(now);
                        self.swallow_double = true;
                    }
                    _ => {}
                }
                ScreenTransition::Stay
            }
            InputEvent::Navigate(direction) => {
                self.cursor = move_cursor::<BOARD_SIZE>(self.cursor, direction);
                self.blink_on = true;
                self.blink_at = now;
                ScreenTransition::Stay
            }
            InputEvent::Enter => {
                self.place(self.cursor, now);
                ScreenTransition::Stay
            }
            InputEvent::Click {
                column,
                row,
                double,
            } => {
                let swallowed = std::mem::take(&mut self.swallow_double);
                if let Some(mv) = self.cell_at(column, row) {
                    self.cursor = mv;
                    if double && !swallowed {
                        self.place(mv, now);
                    } else if double {
                        debug!(%mv, "Double click finished a restart click");
                    }
                }
                ScreenTransition::Stay
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.blink_at) >= self.blink_interval {
            self.blink_on = !self.blink_on;
            self.blink_at = now;
        }

        if let Some(due) = self.com_due
            && now >= due
        {
            self.com_due = None;
            if self.is_com_turn() {
                self.play_com();
            }
        }
    }
}
