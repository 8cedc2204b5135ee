//! Exhaustive tic-tac-toe engine
//!
//! This crate provides:
//! - Tic-Tac-Toe board representation and the shared line check
//! - Minimax search with alpha-beta pruning for an automated opponent
//! - A game session controller with turn order, restarts and deferred
//!   automated moves
//! - A terminal front end (`oxo` binary)

pub mod cli;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use search::{Minimax, SearchConfig, SearchResult, SearchStats};
pub use session::{GameSession, GameStatus, MoveStatus, Rejection, ScheduledMove};
pub use tictactoe::{BoardState, Cell, Outcome, Player};
