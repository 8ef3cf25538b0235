//! History snapshots and move-list ordering.

use serde::{Deserialize, Serialize};

use crate::{Board, MoveLocation, Position};

/// One stored snapshot: the board after a move and where that move went.
///
/// Entry 0 of every history is the empty board with no location.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Location of the move that produced this board.
    location: Option<MoveLocation>,
}

impl HistoryEntry {
    /// The game-start entry.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Entry recording a move at `pos` that produced `board`.
    pub fn after_move(board: Board, pos: Position) -> Self {
        Self {
            board,
            location: Some(pos.location()),
        }
    }
}

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort moves Descending",
            Self::Descending => "Sort moves Ascending",
        }
    }
}
