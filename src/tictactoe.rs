//! Tic-Tac-Toe rules: board representation, line check and outcomes

pub mod board;
pub mod lines;
pub mod outcome;

pub use board::{BoardState, CELL_COUNT, Cell, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::Outcome;
