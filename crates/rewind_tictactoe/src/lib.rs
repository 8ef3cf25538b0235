//! Pure tic-tac-toe logic with a branching move history.
//!
//! # Architecture
//!
//! - **Rules**: stateless win and draw detection over a [`Board`]
//! - **GameState**: history of board snapshots plus a read pointer
//! - **Session**: the game state plus the victory banner, driven by clicks
//! - **GameView**: the text and flags a front end renders
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let game = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |game, cell| game.play(cell));
//!
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(
//!     game.winning_line(),
//!     Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
//! );
//!
//! // Travel back to the start; history is kept.
//! let game = game.jump_to(0);
//! assert_eq!(game.winner(), None);
//! assert_eq!(game.len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use error::{MoveError, StateError};
pub use game::GameState;
pub use history::{HistoryEntry, SortOrder};
pub use position::{MoveLocation, Position};
pub use session::Session;
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveListItem};
