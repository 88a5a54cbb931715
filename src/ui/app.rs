use crate::config::UiConfig;
use crate::error::GameError;
use crate::game::{GameState, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    ui: UiConfig,
}

impl App {
    pub fn new(game_state: GameState, ui: UiConfig) -> Self {
        let selected_column = game_state.width() / 2; // Start in middle
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            ui,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, unless the game has ended
        if !self.game_state.is_over() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.game_state.width() {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Input stops reaching the engine once a result is terminal
        if self.game_state.is_over() {
            return;
        }

        match self.game_state.drop_piece(self.selected_column) {
            Ok(MoveResult::Placed { .. }) => {}
            Ok(MoveResult::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(MoveResult::Win { player, .. }) => {
                self.message = Some(format!("{player} won! Press 'r' to restart."));
            }
            Ok(MoveResult::Tie) => {
                self.message = Some("It's a tie! Press 'r' to restart.".to_string());
            }
            Err(err @ GameError::InvalidColumn { .. }) => {
                tracing::error!(%err, "selected column outside the board");
                self.message = Some("Invalid column!".to_string());
            }
            Err(GameError::GameAlreadyOver) => {
                tracing::warn!("drop attempted after game end");
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let highlight = if self.ui.highlight_win {
            self.game_state.winning_run()
        } else {
            None
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            highlight,
        );
    }
}
