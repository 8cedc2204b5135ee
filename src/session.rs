//! Game state controller
//!
//! A [`GameSession`] owns the live board, the turn, the opponent mode and
//! which screen the front end is showing. Front ends call into it with cell
//! indices and read back a [`GameStatus`] snapshot after every call.
//!
//! Invalid moves never fail: they come back as [`MoveStatus::Rejected`] and
//! the board is left as it was. A disabled cell that still fires a click, or
//! a double click, is expected traffic.
//!
//! The automated opponent's move is deferred for display pacing. The session
//! hands out a [`ScheduledMove`] ticket tagged with the current
//! [`SessionId`]; resetting the game advances the id, so a ticket that
//! arrives after a restart or a return to the menu is ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    config::SessionConfig,
    identifiers::SessionId,
    search::{Minimax, SearchResult},
    tictactoe::{BoardState, CELL_COUNT, Cell, Outcome, Player},
};

/// Who plays the second mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentMode {
    /// Two humans share the board
    Friend,
    /// The engine plays [`SessionConfig::automated_mark`]
    Automated,
}

impl OpponentMode {
    pub fn from_automated(automated: bool) -> Self {
        if automated {
            OpponentMode::Automated
        } else {
            OpponentMode::Friend
        }
    }
}

/// Which panel the front end should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    Game,
}

/// Why a move was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// No game on screen (menu is showing)
    NotPlaying,
    /// The game already ended in a win or draw
    GameOver,
    /// The automated opponent is to move
    AutomatedTurn,
    /// Index outside 0-8
    OutOfRange,
    /// Cell already holds a mark
    CellOccupied,
    /// The ticket belongs to a reset session or was already played
    StaleTicket,
}

/// Result of submitting a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    Applied {
        position: usize,
        player: Player,
        outcome: Outcome,
    },
    Rejected(Rejection),
}

impl MoveStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveStatus::Applied { .. })
    }
}

/// A pending automated move, valid only for the session and ply it was
/// issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    session: SessionId,
    ply: usize,
    mark: Player,
    delay: Duration,
}

impl ScheduledMove {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn mark(&self) -> Player {
        self.mark
    }

    /// How long the front end should wait before resolving the ticket
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Read-only view of a session for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub board: BoardState,
    pub outcome: Outcome,
    pub active: bool,
    pub mode: OpponentMode,
    pub screen: Screen,
    pub session: SessionId,
}

impl GameStatus {
    /// Result line shown under the board
    pub fn headline(&self) -> String {
        match self.outcome {
            Outcome::InProgress => "Result: ".to_string(),
            Outcome::Win(player) => format!("{player} wins!"),
            Outcome::Draw => "Draw!".to_string(),
        }
    }

    /// Whether a cell should accept clicks. Indices off the board never do.
    pub fn cell_enabled(&self, position: usize) -> bool {
        self.active
            && self.screen == Screen::Game
            && position < CELL_COUNT
            && self.board.get(position) == Cell::Empty
    }
}

/// The game state controller
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    engine: Minimax,
    board: BoardState,
    active: bool,
    mode: OpponentMode,
    screen: Screen,
    session: SessionId,
}

impl GameSession {
    /// Create a session showing the menu.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            engine: Minimax::new(config.search),
            board: BoardState::new_with_player(config.first_mover),
            active: false,
            mode: OpponentMode::Friend,
            screen: Screen::Menu,
            session: SessionId::new(0),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> OpponentMode {
        self.mode
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            board: self.board,
            outcome: self.outcome(),
            active: self.active,
            mode: self.mode,
            screen: self.screen,
            session: self.session,
        }
    }

    /// Switch to the game screen with the chosen opponent and a fresh board.
    pub fn start_game(&mut self, automated: bool) {
        self.mode = OpponentMode::from_automated(automated);
        self.screen = Screen::Game;
        tracing::info!(mode = ?self.mode, "starting game");
        self.restart();
    }

    /// Clear the board and hand the first move to the configured opener.
    ///
    /// Any pending automated move becomes stale.
    pub fn restart(&mut self) {
        self.board = BoardState::new_with_player(self.config.first_mover);
        self.active = true;
        self.session = self.session.next();
        tracing::debug!(session = %self.session, first = %self.config.first_mover, "board reset");
    }

    /// Leave the game for the menu. Pending automated moves become stale and
    /// further moves are ignored until the next [`GameSession::start_game`].
    pub fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.active = false;
        self.session = self.session.next();
        tracing::debug!(session = %self.session, "returned to menu");
    }

    /// Submit a move on behalf of a human player.
    ///
    /// Ignored (with the reason reported) when no game is on screen, the game
    /// is over, the automated opponent is to move, the index is outside 0-8
    /// or the cell is taken.
    pub fn apply_move(&mut self, position: usize) -> MoveStatus {
        let status = match self.check_human_move(position) {
            Err(reason) => MoveStatus::Rejected(reason),
            Ok(()) => self.place(position),
        };
        if let MoveStatus::Rejected(reason) = status {
            tracing::debug!(position, ?reason, "move ignored");
        }
        status
    }

    fn check_human_move(&self, position: usize) -> Result<(), Rejection> {
        if self.screen != Screen::Game {
            return Err(Rejection::NotPlaying);
        }
        if !self.active {
            return Err(Rejection::GameOver);
        }
        if self.is_automated_turn() {
            return Err(Rejection::AutomatedTurn);
        }
        if position >= CELL_COUNT {
            return Err(Rejection::OutOfRange);
        }
        if !self.board.is_empty(position) {
            return Err(Rejection::CellOccupied);
        }
        Ok(())
    }

    fn is_automated_turn(&self) -> bool {
        self.mode == OpponentMode::Automated && self.board.to_move == self.config.automated_mark
    }

    /// Ticket for the automated move, if the engine is to move now.
    pub fn scheduled_move(&self) -> Option<ScheduledMove> {
        if self.screen != Screen::Game || !self.active || !self.is_automated_turn() {
            return None;
        }
        Some(ScheduledMove {
            session: self.session,
            ply: self.board.occupied_count(),
            mark: self.config.automated_mark,
            delay: self.config.move_delay(),
        })
    }

    /// Play a scheduled automated move.
    ///
    /// The ticket must come from this session generation and from the
    /// current position; otherwise nothing happens.
    pub fn resolve_scheduled(&mut self, ticket: ScheduledMove) -> MoveStatus {
        if ticket.session != self.session || ticket.ply != self.board.occupied_count() {
            tracing::debug!(
                ticket = %ticket.session,
                current = %self.session,
                "stale automated move dropped"
            );
            return MoveStatus::Rejected(Rejection::StaleTicket);
        }
        if self.screen != Screen::Game {
            return MoveStatus::Rejected(Rejection::NotPlaying);
        }
        if !self.active {
            return MoveStatus::Rejected(Rejection::GameOver);
        }

        match self.engine.best_move(&self.board, ticket.mark) {
            Some(SearchResult { position, .. }) => self.place(position),
            None => MoveStatus::Rejected(Rejection::GameOver),
        }
    }

    /// Write the mover's mark, re-derive the outcome and pass the turn.
    fn place(&mut self, position: usize) -> MoveStatus {
        let player = self.board.to_move;
        self.board.cells[position] = player.to_cell();

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            self.active = false;
            tracing::info!(board = %self.board.encode(), %outcome, "game over");
        } else {
            self.board.to_move = player.opponent();
        }
        tracing::debug!(position, player = %player, "move applied");

        MoveStatus::Applied {
            position,
            player,
            outcome,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
