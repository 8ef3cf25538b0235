//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Player, Position};

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Scan order is part of the contract. When a board holds more than one
/// line, the first one here wins the tie.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// First completed line and its owner.
fn first_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some((player, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    first_line(board).map(|(player, _)| player)
}

/// Returns the three positions of the winning line, if any.
///
/// Uses the same scan as [`winner`], so the two never disagree.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    first_line(board).map(|(_, line)| line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
            match c {
                'X' => board.set(pos, Square::Occupied(Player::X)),
                'O' => board.set(pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from("XXXOO....");
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from("XXO.O.OX.");
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_first_line_in_scan_order_wins_tie() {
        // Row 0 and column 0 both belong to X; the row is scanned first.
        let board = board_from("XXXXOOXOO");
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from("XXO......");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_and_line_agree_on_every_board() {
        const SQUARES: [Square; 3] = [
            Square::Empty,
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
        ];

        for code in 0..3usize.pow(9) {
            let mut board = Board::new();
            let mut rest = code;
            for pos in Position::ALL {
                board.set(pos, SQUARES[rest % 3]);
                rest /= 3;
            }

            match (winner(&board), winning_line(&board)) {
                (Some(player), Some(line)) => {
                    assert!(LINES.contains(&line), "board {code}: {line:?}");
                    for pos in line {
                        assert_eq!(board.get(pos), Square::Occupied(player), "board {code}");
                    }
                }
                (None, None) => {}
                (w, l) => panic!("board {code}: winner {w:?} but line {l:?}"),
            }
        }
    }

    #[test]
    fn test_winner_and_line_agree_on_every_line() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(player));
                }
                let found = winning_line(&board).expect("line should be detected");
                assert_eq!(winner(&board), Some(player));
                for pos in found {
                    assert_eq!(board.get(pos), Square::Occupied(player));
                }
            }
        }
    }
}
