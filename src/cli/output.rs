//! Output formatting for CLI

use std::fmt::Write as _;

use crate::{
    search::SearchStats,
    session::Rejection,
    tictactoe::{BoardState, Cell},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:14} {}", format!("{}:", key), value);
}

/// Render the board as a grid, numbering empty cells so players can see
/// which index to type.
///
/// ```
/// use oxo::{cli::output::render_board, tictactoe::BoardState};
///
/// let board = BoardState::from_string("X...O....").unwrap();
/// let expected = " X | 1 | 2 \n---+---+---\n 3 | O | 5 \n---+---+---\n 6 | 7 | 8 \n";
/// assert_eq!(render_board(&board), expected);
/// ```
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                match board.get(idx) {
                    Cell::Empty => idx.to_string(),
                    cell => cell.to_char().to_string(),
                }
            })
            .collect();
        let _ = writeln!(out, " {} ", cells.join(" | "));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// Human-readable reason for an ignored move
pub fn describe_rejection(reason: Rejection) -> &'static str {
    match reason {
        Rejection::NotPlaying => "no game in progress",
        Rejection::GameOver => "the game is over",
        Rejection::AutomatedTurn => "wait for the computer to move",
        Rejection::OutOfRange => "cells are numbered 0-8",
        Rejection::CellOccupied => "that cell is taken",
        Rejection::StaleTicket => "move belonged to an earlier game",
    }
}

/// Format search statistics
pub fn format_stats(stats: &SearchStats) -> String {
    format!("{} nodes, {} cutoffs", stats.nodes, stats.cutoffs)
}
