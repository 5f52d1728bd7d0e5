//! Main menu: pick a play mode or quit.

use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::Instant;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

use crate::input::{Direction as Arrow, InputEvent};
use crate::screen::{Screen, ScreenTransition};
use crate::settings::PlayMode;
use crate::ui;

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuOption {
    /// Two humans.
    #[strum(to_string = "1 vs 1")]
    OneVsOne,
    /// Human against the computer.
    #[strum(to_string = "1 vs COM")]
    OneVsCom,
    /// Leave the game.
    Quit,
}

impl MenuOption {
    /// Play mode started by this entry, if any.
    pub fn play_mode(self) -> Option<PlayMode> {
        match self {
            Self::OneVsOne => Some(PlayMode::OneVsOne),
            Self::OneVsCom => Some(PlayMode::OneVsCom),
            Self::Quit => None,
        }
    }

    fn count() -> usize {
        Self::iter().count()
    }
}

/// State for the main menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    title: String,
    list_state: ListState,
    /// Rows occupied by the menu entries at the last render.
    #[getter(skip)]
    items_area: Rect,
}

impl MenuScreen {
    /// Creates a menu with the first entry selected.
    #[instrument(skip(title), fields(title = %title.as_ref()))]
    pub fn new(title: impl AsRef<str>) -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title: title.as_ref().to_string(),
            list_state,
            items_area: Rect::default(),
        }
    }

    /// Returns the highlighted entry.
    pub fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::iter()
            .nth(idx)
            .unwrap_or(MenuOption::Quit)
    }

    /// Moves the highlight up, wrapping to the bottom.
    #[instrument(skip(self))]
    pub fn select_previous(&mut self) {
        let count = MenuOption::count();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves the highlight down, wrapping to the top.
    #[instrument(skip(self))]
    pub fn select_next(&mut self) {
        let count = MenuOption::count();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Resolves the highlighted entry into a transition.
    #[instrument(skip(self))]
    pub fn activate(&self) -> ScreenTransition {
        let option = self.selected_option();
        info!(%option, "Menu option selected");
        match option.play_mode() {
            Some(mode) => ScreenTransition::StartGame(mode),
            None => ScreenTransition::Quit,
        }
    }

    /// Index of the entry drawn at a terminal position.
    fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.items_area.contains(Position::new(column, row)) {
            return None;
        }
        let idx = usize::from(row - self.items_area.y) + self.list_state.offset();
        (idx < MenuOption::count()).then_some(idx)
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(self.title.as_str())
            .style(ui::title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::iter()
            .map(|option| ListItem::new(option.to_string()))
            .collect();

        let block = Block::default().borders(Borders::ALL).title("Menu");
        self.items_area = block.inner(chunks[1]);

        let menu = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(menu, chunks[1], &mut self.list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter/double-click: Select | Esc/q: Quit")
            .style(ui::help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, _now))]
    fn handle_input(&mut self, input: InputEvent, _now: Instant) -> ScreenTransition {
        match input {
            InputEvent::Navigate(Arrow::Up) => {
                self.select_previous();
                ScreenTransition::Stay
            }
            InputEvent::Navigate(Arrow::Down) => {
                self.select_next();
                ScreenTransition::Stay
            }
            InputEvent::Navigate(_) => ScreenTransition::Stay,
            InputEvent::Enter => self.activate(),
            InputEvent::Escape | InputEvent::Quit => ScreenTransition::Quit,
            InputEvent::Click {
                column,
                row,
                double,
            } => match self.option_at(column, row) {
                Some(idx) => {
                    self.list_state.select(Some(idx));
                    if double {
                        self.activate()
                    } else {
                        ScreenTransition::Stay
                    }
                }
                None => ScreenTransition::Stay,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_menu_starts_on_first_entry() {
        let menu = MenuScreen::new("Tic-Tac-Toe");
        assert_eq!(menu.selected_option(), MenuOption::OneVsOne);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        menu.handle_input(InputEvent::Navigate(Arrow::Up), now());
        assert_eq!(menu.selected_option(), MenuOption::Quit);
        menu.handle_input(InputEvent::Navigate(Arrow::Down), now());
        assert_eq!(menu.selected_option(), MenuOption::OneVsOne);
    }

    #[test]
    fn test_left_right_ignored() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        menu.handle_input(InputEvent::Navigate(Arrow::Right), now());
        assert_eq!(menu.selected_option(), MenuOption::OneVsOne);
    }

    #[test]
    fn test_enter_starts_selected_mode() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        menu.select_next();
        assert_eq!(
            menu.handle_input(InputEvent::Enter, now()),
            ScreenTransition::StartGame(PlayMode::OneVsCom)
        );
    }

    #[test]
    fn test_quit_entry_quits() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        menu.select_previous();
        assert_eq!(menu.activate(), ScreenTransition::Quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        assert_eq!(
            menu.handle_input(InputEvent::Escape, now()),
            ScreenTransition::Quit
        );
    }

    #[test]
    fn test_click_before_render_is_ignored() {
        let mut menu = MenuScreen::new("Tic-Tac-Toe");
        let click = InputEvent::Click {
            column: 0,
            row: 0,
            double: true,
        };
        assert_eq!(menu.handle_input(click, now()), ScreenTransition::Stay);
        assert_eq!(menu.selected_option(), MenuOption::OneVsOne);
    }
}
