//! Play command - interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use super::parse_player_token;
use crate::{
    cli::output::{describe_rejection, render_board},
    config::SessionConfig,
    session::{GameSession, MoveStatus, Screen},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Play against the engine
    Ai,
    /// Two players at one keyboard
    Friend,
}

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Skip the menu and start against this opponent
    #[arg(long, value_enum)]
    pub vs: Option<Opponent>,

    /// JSON session config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mark played by the engine (`x` or `o`)
    #[arg(long)]
    pub automated: Option<String>,

    /// Mark that opens each game (`x` or `o`)
    #[arg(long)]
    pub first: Option<String>,

    /// Pause before the engine's move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Disable alpha-beta pruning (slower, same moves)
    #[arg(long)]
    pub no_pruning: bool,
}

impl PlayArgs {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(token) = &self.automated {
            config = config.with_automated_mark(parse_player_token(token, "--automated")?);
        }
        if let Some(token) = &self.first {
            config = config.with_first_mover(parse_player_token(token, "--first")?);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_move_delay(Duration::from_millis(ms));
        }
        if self.no_pruning {
            config.search.pruning = false;
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    let mut session = GameSession::new(config);
    if let Some(vs) = args.vs {
        session.start_game(vs == Opponent::Ai);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock(), thread::sleep)
}

/// A line typed by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Cell(usize),
    Friend,
    Ai,
    Restart,
    Menu,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "restart" => Some(Input::Restart),
        "m" | "menu" => Some(Input::Menu),
        "f" | "friend" => Some(Input::Friend),
        "a" | "ai" => Some(Input::Ai),
        other => other.parse().ok().map(Input::Cell),
    }
}

/// Drive a session from line-based input until quit or end of input.
///
/// `pause` receives the pacing delay of each automated move.
pub fn run<R, W, P>(session: &mut GameSession, input: R, mut out: W, mut pause: P) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: FnMut(Duration),
{
    let mut lines = input.lines();

    loop {
        if let Some(ticket) = session.scheduled_move() {
            writeln!(out, "Computer ({}) is thinking...", ticket.mark())?;
            pause(ticket.delay());
            if let MoveStatus::Applied { position, .. } = session.resolve_scheduled(ticket) {
                writeln!(out, "Computer plays {position}")?;
            }
        }

        prompt(session, &mut out)?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|e| anyhow!("failed to read input: {e}"))?;

        match parse_input(&line) {
            Some(Input::Quit) => return Ok(()),
            Some(Input::Restart) if session.screen() == Screen::Game => session.restart(),
            Some(Input::Menu) => session.return_to_menu(),
            Some(Input::Friend) if session.screen() == Screen::Menu => session.start_game(false),
            Some(Input::Ai) if session.screen() == Screen::Menu => session.start_game(true),
            Some(Input::Cell(position)) => {
                if let MoveStatus::Rejected(reason) = session.apply_move(position) {
                    writeln!(out, "Ignored: {}", describe_rejection(reason))?;
                }
            }
            _ => writeln!(out, "Unrecognised input: '{}'", line.trim())?,
        }
    }
}

fn prompt<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    let status = session.status();
    match status.screen {
        Screen::Menu => {
            writeln!(out, "\nTic-Tac-Toe")?;
            writeln!(out, "  f) play vs friend")?;
            writeln!(out, "  a) play vs computer")?;
            writeln!(out, "  q) quit")?;
        }
        Screen::Game => {
            writeln!(out)?;
            write!(out, "{}", render_board(&status.board))?;
            writeln!(out, "{}", status.headline())?;
            if status.active {
                writeln!(
                    out,
                    "{} to move (0-8, r=restart, m=menu, q=quit)",
                    status.board.to_move
                )?;
            } else {
                writeln!(out, "r=restart, m=menu, q=quit")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::{Cell, Outcome, Player};

    fn play_script(session: &mut GameSession, script: &str) -> (String, Vec<Duration>) {
        let mut out = Vec::new();
        let mut pauses = Vec::new();
        run(session, Cursor::new(script), &mut out, |d| pauses.push(d)).unwrap();
        (String::from_utf8(out).unwrap(), pauses)
    }

    #[test]
    fn parse_input_accepts_commands_and_cells() {
        assert_eq!(parse_input(" 4 "), Some(Input::Cell(4)));
        assert_eq!(parse_input("Q"), Some(Input::Quit));
        assert_eq!(parse_input("restart"), Some(Input::Restart));
        assert_eq!(parse_input("hello"), None);
    }

    #[test]
    fn friend_game_from_menu() {
        let mut session = GameSession::default();
        let (out, pauses) = play_script(&mut session, "f\n0\n3\n1\n4\n2\n");

        assert!(pauses.is_empty());
        assert_eq!(session.outcome(), Outcome::Win(Player::X));
        assert!(out.contains("X wins!"));
    }

    #[test]
    fn computer_replies_after_pacing_delay() {
        let mut session = GameSession::default();
        session.start_game(true);
        let (out, pauses) = play_script(&mut session, "4\nq\n");

        assert_eq!(pauses, vec![Duration::from_millis(500)]);
        assert!(out.contains("Computer plays 0"));
        assert_eq!(session.board().get(0), Cell::O);
    }

    #[test]
    fn rejected_moves_are_reported_and_ignored() {
        let mut session = GameSession::default();
        session.start_game(false);
        let (out, _) = play_script(&mut session, "4\n4\n12\n");

        assert!(out.contains("that cell is taken"));
        assert!(out.contains("cells are numbered 0-8"));
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn menu_then_restart_commands() {
        let mut session = GameSession::default();
        session.start_game(false);
        let (_, _) = play_script(&mut session, "4\nr\n");
        assert_eq!(session.board().occupied_count(), 0);

        let (out, _) = play_script(&mut session, "m\n");
        assert_eq!(session.screen(), Screen::Menu);
        assert!(out.contains("play vs computer"));
    }
}
