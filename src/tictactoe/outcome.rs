//! Derived game outcome

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Player, board::CELL_COUNT, lines::LineAnalyzer};

/// Outcome of a position, recomputed from the cells whenever it is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Run the line check over `cells`.
    ///
    /// A completed line wins even on a full board; a full board without one
    /// is a draw.
    pub fn of_cells(cells: &[Cell; CELL_COUNT]) -> Self {
        match LineAnalyzer::winner(cells) {
            Some(player) => Outcome::Win(player),
            None if cells.contains(&Cell::Empty) => Outcome::InProgress,
            None => Outcome::Draw,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
