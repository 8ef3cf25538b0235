//! Game state with a branching, append-only history.
//!
//! `GameState` is a plain owned value. Transitions take the state and hand
//! back the next one, so a test can drive a whole game without a terminal.
//! Everything derived from the board (winner, draw, winning line, next
//! player) is recomputed on each read.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::rules::{is_draw, winner, winning_line};
use crate::{
    Board, GameStatus, HistoryEntry, MoveError, Player, Position, SortOrder, StateError,
};

/// Complete game state.
///
/// Deserializing goes through an unchecked wire form so a stored state that breaks
/// the history invariants is rejected instead of panicking later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Snapshots, game start first. Never empty.
    history: Vec<HistoryEntry>,
    /// Index of the displayed snapshot.
    current_move: usize,
    /// Move list presentation order.
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game with only the empty start entry.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_move: 0,
            sort_order,
        }
    }

    /// Returns every stored snapshot, game start first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the snapshot at `move_number`, if it exists.
    pub fn entry(&self, move_number: usize) -> Option<&HistoryEntry> {
        self.history.get(move_number)
    }

    /// Number of stored snapshots, including game start.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; a game has at least its start entry.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move list presentation order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Player who moves next from the current move.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        winner(self.current_board())
    }

    /// Winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_board())
    }

    /// True when the current board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_draw() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Validates and applies a move at cell `index`, returning the next state.
    ///
    /// `self` is left as it was. Entries after the current move are dropped
    /// from the returned state before the new snapshot is appended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the index is out of range, the square is
    /// taken, or the current board already has a winner.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = self.current_board();

        if let Some(player) = winner(board) {
            return Err(MoveError::GameOver(player));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next_board = board.with_mark(pos, player);

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(HistoryEntry::after_move(next_board, pos));
        let current_move = history.len() - 1;

        debug!(position = %pos, %player, current_move, "Move applied");
        Ok(Self {
            history,
            current_move,
            sort_order: self.sort_order,
        })
    }

    /// Plays cell `index`, ignoring the request if it is not a legal move.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(self, index: usize) -> Self {
        match self.try_play(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self
            }
        }
    }

    /// Moves the read pointer to `move_number`.
    ///
    /// Targets past the end are clamped to the latest snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(mut self, move_number: usize) -> Self {
        let last = self.history.len() - 1;
        if move_number > last {
            warn!(move_number, last, "Jump target out of range, clamping");
        }
        self.current_move = move_number.min(last);
        self
    }

    /// Flips the move list order. History and the current move are untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(mut self) -> Self {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
        self
    }

    /// History indices in the order the move list presents them.
    pub fn moves_in_display_order(&self) -> Vec<usize> {
        let moves = 0..self.history.len();
        match self.sort_order {
            SortOrder::Ascending => moves.collect(),
            SortOrder::Descending => moves.rev().collect(),
        }
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Debug, Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    current_move: usize,
    sort_order: SortOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let start = raw.history.first().ok_or(StateError::EmptyHistory)?;
        if start != &HistoryEntry::start() {
            return Err(StateError::BadStart);
        }
        if raw.current_move >= raw.history.len() {
            return Err(StateError::MoveOutOfRange {
                current_move: raw.current_move,
                len: raw.history.len(),
            });
        }
        Ok(Self {
            history: raw.history,
            current_move: raw.current_move,
            sort_order: raw.sort_order,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
