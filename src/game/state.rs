use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Run};
use super::Player;
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};

/// Outcome of a single [`GameState::drop_piece`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveResult {
    /// Piece landed; the turn passed to the other player.
    Placed { row: usize, column: usize },
    /// Column had no empty cell. Nothing changed.
    ColumnFull,
    /// Piece landed and completed four in a row for `player`.
    Win {
        player: Player,
        row: usize,
        column: usize,
    },
    /// Piece landed on the last empty cell without a win.
    Tie,
}

impl MoveResult {
    /// `Win` and `Tie` end the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Tie)
    }
}

/// A single game: the grid plus whose turn it is.
///
/// Game-over is not stored. After a win the winner stays on move, so the game
/// is over exactly when the board is full or the player on move already holds
/// four in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state on the standard 6x7 board
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::One, // Player 1 starts
        }
    }

    /// Start a game with the given board dimensions
    pub fn new_game(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(height = config.height, width = config.width, "new game");
        Ok(GameState {
            board: Board::new(config.height, config.width),
            current_player: Player::One,
        })
    }

    /// Clear the board for a new game with the same dimensions
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.height(), self.board.width());
        self.current_player = Player::One;
    }

    /// Player to move, or the winner once the game is won
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Contents of a cell, `None` when the coordinates are off the board
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    pub fn has_connect_four(&self, player: Player) -> bool {
        self.board.has_connect_four(player)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// The run that won the game, if it has been won
    pub fn winning_run(&self) -> Option<Run> {
        self.board.winning_run(self.current_player)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_full() || self.board.has_connect_four(self.current_player)
    }

    /// Number of pieces on the board
    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// The win check runs before the tie check, so filling the board with a
    /// winning piece is a `Win`. The turn only advances on `Placed`.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult, GameError> {
        let width = self.board.width();
        if column >= width {
            return Err(GameError::InvalidColumn { column, width });
        }
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let Some(row) = self.board.landing_row(column) else {
            tracing::debug!(column, "column full, move ignored");
            return Ok(MoveResult::ColumnFull);
        };

        let player = self.current_player;
        self.board.place(row, column, player.to_cell());
        tracing::debug!(player = player.id(), row, column, "piece placed");

        if self.board.connects_through(row, column) {
            tracing::info!(player = player.id(), moves = self.moves_played(), "game won");
            return Ok(MoveResult::Win {
                player,
                row,
                column,
            });
        }

        if self.board.is_full() {
            tracing::info!(moves = self.moves_played(), "game tied");
            return Ok(MoveResult::Tie);
        }

        self.current_player = player.other();
        Ok(MoveResult::Placed { row, column })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
