//! Best-move command - search a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_player_token;
use crate::{
    cli::output::{format_stats, print_kv, print_section, render_board},
    search::{Minimax, SearchConfig, SearchResult, SearchStats},
    tictactoe::{BoardState, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the engine's move for a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells, '.' for empty, optional `_X`/`_O` turn suffix
    /// (e.g. "XX..O....")
    pub board: String,

    /// Mark to search for (defaults to the side to move)
    #[arg(long)]
    pub mark: Option<String>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything the command reports about a position
#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub board: String,
    pub mark: Player,
    pub outcome: Outcome,
    pub threats_x: Vec<usize>,
    pub threats_o: Vec<usize>,
    pub best: Option<SearchResult>,
    pub stats: Option<SearchStats>,
}

/// Analyse `board` for `mark` with the given search options.
pub fn analyze(board: &BoardState, mark: Player, config: SearchConfig) -> PositionReport {
    let outcome = board.outcome();
    let search = if outcome.is_terminal() {
        None
    } else {
        Minimax::new(config).search(board, mark)
    };

    PositionReport {
        board: board.encode(),
        mark,
        outcome,
        threats_x: board.winning_moves(Player::X),
        threats_o: board.winning_moves(Player::O),
        best: search.map(|(result, _)| result),
        stats: search.map(|(_, stats)| stats),
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)?;
    let mark = match &args.mark {
        Some(token) => parse_player_token(token, "--mark")?,
        None => board.to_move,
    };
    let config = if args.no_pruning {
        SearchConfig::full_width()
    } else {
        SearchConfig::default()
    };

    let report = analyze(&board, mark, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Position {}", report.board));
    print!("{}", render_board(&board));
    print_kv("Outcome", &report.outcome.to_string());
    print_kv("X threats", &format!("{:?}", report.threats_x));
    print_kv("O threats", &format!("{:?}", report.threats_o));

    match (report.best, report.stats) {
        (Some(best), Some(stats)) => {
            print_kv("Searching for", &mark.to_string());
            print_kv("Best move", &best.position.to_string());
            print_kv("Score", &best.score.to_string());
            print_kv("Work", &format_stats(&stats));
        }
        _ => println!("\nPosition is terminal; no move to search."),
    }

    Ok(())
}
