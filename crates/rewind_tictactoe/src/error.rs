//! Reasons a move can be refused.

use crate::{Player, Position};

/// Error that can occur when validating a move.
///
/// Only [`GameState::try_play`](crate::GameState::try_play) surfaces this;
/// the click-driven paths drop it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),
}

/// Error raised when a stored game state breaks the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// History has no entries at all.
    #[display("History is empty")]
    EmptyHistory,

    /// The first entry is not the empty start board.
    #[display("History does not begin with the empty game start")]
    BadStart,

    /// The read pointer is past the end of history.
    #[display("Current move {} is out of range for {} entries", current_move, len)]
    MoveOutOfRange {
        /// Stored read pointer.
        current_move: usize,
        /// Number of history entries.
        len: usize,
    },
}
