//! A play session: the game state plus the victory banner flag.
//!
//! Each method here corresponds to one user input on the display surface.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{GameState, SortOrder};

/// A single game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Session {
    /// Game history and read pointer.
    game: GameState,
    /// Whether the victory banner is currently raised.
    banner: bool,
    /// Whether winning moves raise the banner at all.
    banner_enabled: bool,
}

impl Session {
    /// Starts a session with an empty board.
    #[instrument]
    pub fn new(sort_order: SortOrder, banner_enabled: bool) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            banner: false,
            banner_enabled,
        }
    }

    /// A cell was clicked. Illegal moves leave the session unchanged.
    #[instrument(skip(self))]
    pub fn click_cell(self, index: usize) -> Self {
        match self.game.try_play(index) {
            Ok(game) => {
                let banner = match game.winner() {
                    Some(player) if self.banner_enabled => {
                        info!(%player, "Winning move played");
                        true
                    }
                    _ => self.banner,
                };
                Self {
                    game,
                    banner,
                    ..self
                }
            }
            Err(e) => {
                debug!(error = %e, "Cell click ignored");
                self
            }
        }
    }

    /// A move-list entry was clicked. Always lowers the banner.
    #[instrument(skip(self))]
    pub fn click_move(self, move_number: usize) -> Self {
        Self {
            game: self.game.jump_to(move_number),
            banner: false,
            ..self
        }
    }

    /// The sort toggle was clicked.
    #[instrument(skip(self))]
    pub fn click_sort(self) -> Self {
        Self {
            game: self.game.toggle_sort_order(),
            ..self
        }
    }
}

impl Default for Session {
    /// Ascending move list with the banner enabled, matching the config defaults.
    fn default() -> Self {
        Self::new(SortOrder::default(), true)
    }
}
