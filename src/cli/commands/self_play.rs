//! Self-play command - the engine plays both marks

use anyhow::Result;
use clap::Parser;

use super::parse_player_token;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    search::{Minimax, SearchConfig},
    tictactoe::{BoardState, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play against itself")]
pub struct SelfPlayArgs {
    /// Which mark opens (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

/// A finished engine-vs-engine game
#[derive(Debug, Clone)]
pub struct SelfPlayGame {
    pub moves: Vec<(Player, usize)>,
    pub final_board: BoardState,
    pub outcome: Outcome,
}

/// Play out a game from `start`, each side maximizing for itself.
pub fn play_out(start: BoardState, engine: &Minimax) -> SelfPlayGame {
    let mut board = start;
    let mut moves = Vec::new();

    while let Some(result) = engine.best_move(&board, board.to_move) {
        let mover = board.to_move;
        board.cells[result.position] = mover.to_cell();
        board.to_move = mover.opponent();
        moves.push((mover, result.position));
    }

    SelfPlayGame {
        moves,
        final_board: board,
        outcome: board.outcome(),
    }
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let first = parse_player_token(&args.first, "--first")?;
    let config = if args.no_pruning {
        SearchConfig::full_width()
    } else {
        SearchConfig::default()
    };

    let game = play_out(BoardState::new_with_player(first), &Minimax::new(config));

    print_section("Self-play");
    for (ply, (player, position)) in game.moves.iter().enumerate() {
        println!("  {:>2}. {player} -> {position}", ply + 1);
    }
    println!();
    print!("{}", render_board(&game.final_board));
    print_kv("Outcome", &game.outcome.to_string());

    Ok(())
}
