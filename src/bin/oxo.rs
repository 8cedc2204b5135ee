//! oxo CLI - play tic-tac-toe against an exhaustive search engine
//!
//! This CLI provides:
//! - Interactive games against a friend or the engine
//! - Best-move analysis of a single position
//! - Engine self-play

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with a minimax opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(oxo::cli::commands::play::PlayArgs),

    /// Find the engine's move for a position
    BestMove(oxo::cli::commands::best_move::BestMoveArgs),

    /// Let the engine play against itself
    SelfPlay(oxo::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::BestMove(args) => oxo::cli::commands::best_move::execute(args),
        Commands::SelfPlay(args) => oxo::cli::commands::self_play::execute(args),
    }
}
