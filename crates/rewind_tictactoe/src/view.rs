//! Pure projection of a session into what the display shows.

use crate::{Board, GameStatus, Position, Session};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MoveListItem {
    /// History index this entry jumps to.
    move_number: usize,
    /// Button text, e.g. `Go to move #3 (2, 1)`.
    label: String,
    /// True for the entry currently displayed.
    is_current: bool,
}

/// Everything the display surface renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GameView {
    /// The displayed board.
    board: Board,
    /// Squares to highlight as the winning line.
    winning_line: Option<[Position; 3]>,
    /// Status line text.
    status: String,
    /// Derived game status.
    game_status: GameStatus,
    /// `You are at move #N`.
    position_label: String,
    /// Text of the sort toggle button.
    sort_label: String,
    /// Move list in presentation order.
    moves: Vec<MoveListItem>,
    /// Banner text, present only while the banner is raised.
    banner: Option<String>,
}

impl GameView {
    /// Builds the view for `session`. Calling this has no side effects.
    pub fn project(session: &Session) -> Self {
        let game = session.game();
        let game_status = game.status();

        let status = match game_status {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw! No one wins.".to_string(),
            GameStatus::InProgress => format!("Next player: {}", game.next_player()),
        };

        let moves = game
            .moves_in_display_order()
            .into_iter()
            .map(|move_number| {
                let label = match game.entry(move_number).and_then(|e| *e.location()) {
                    Some(location) if move_number > 0 => {
                        format!("Go to move #{} {}", move_number, location)
                    }
                    _ => "Go to game start".to_string(),
                };
                MoveListItem {
                    move_number,
                    label,
                    is_current: move_number == game.current_move(),
                }
            })
            .collect();

        let banner = match (*session.banner(), game.winner()) {
            (true, Some(player)) => Some(format!("Player {} wins!", player)),
            _ => None,
        };

        Self {
            board: game.current_board().clone(),
            winning_line: game.winning_line(),
            status,
            game_status,
            position_label: format!("You are at move #{}", game.current_move()),
            sort_label: game.sort_order().toggle_label().to_string(),
            moves,
            banner,
        }
    }

    /// True if `pos` is part of the highlighted winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}
