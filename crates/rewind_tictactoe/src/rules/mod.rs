//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value. Nothing here is
//! cached; callers recompute on every read.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner, winning_line};
