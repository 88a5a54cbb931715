//! Non-interactive front-end: replays a fixed list of columns against a game.

use serde::Serialize;

use crate::error::GameError;
use crate::game::{GameState, MoveResult, Player};

/// One replayed drop: who moved, which column they asked for, and what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub mover: Player,
    pub requested: usize,
    #[serde(flatten)]
    pub outcome: MoveResult,
}

impl MoveRecord {
    /// One-line summary using the same 0-based indices as the input
    pub fn describe(&self) -> String {
        let prefix = format!("{} -> column {}", self.mover, self.requested);
        match self.outcome {
            MoveResult::Placed { row, .. } => format!("{prefix}: placed at row {row}"),
            MoveResult::ColumnFull => format!("{prefix}: column is full, ignored"),
            MoveResult::Win { player, .. } => format!("{prefix}: {player} won!"),
            MoveResult::Tie => format!("{prefix}: it's a tie!"),
        }
    }
}

/// Play `columns` in order, stopping at the first terminal result.
///
/// Columns left over after a terminal result are not sent to the engine.
pub fn replay(state: &mut GameState, columns: &[usize]) -> Result<Vec<MoveRecord>, GameError> {
    let mut records = Vec::with_capacity(columns.len());

    for (i, &column) in columns.iter().enumerate() {
        let mover = state.current_player();
        let outcome = state.drop_piece(column)?;
        records.push(MoveRecord {
            mover,
            requested: column,
            outcome,
        });

        if outcome.is_terminal() {
            let skipped = columns.len() - i - 1;
            if skipped > 0 {
                tracing::warn!(skipped, "game ended before all moves were played");
            }
            break;
        }
    }

    Ok(records)
}
