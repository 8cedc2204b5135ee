//! Exhaustive minimax search with alpha-beta pruning
//!
//! The search always maximizes for one fixed mark (the automated side) and
//! minimizes for the other, whoever is to move at a given depth. Leaves are
//! scored +10 / -10 / 0 with no depth term, so a slow forced win is worth as
//! much as an immediate one. Among equally scored moves the lowest cell index
//! wins, because only a strictly better score replaces the current best.
//!
//! All recursion runs on one scratch copy of the cells owned by the search
//! call. Every placement is reverted before the cutoff test, so the scratch
//! board is restored on every path out of a node.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, CELL_COUNT, Cell, LineAnalyzer, Player};

/// Score of a position won by the maximizing mark
pub const WIN_SCORE: i32 = 10;
/// Score of a position won by the minimizing mark
pub const LOSS_SCORE: i32 = -10;
/// Score of a full board with no line
pub const DRAW_SCORE: i32 = 0;

/// Search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop examining siblings once `beta <= alpha`. Disabling it gives a
    /// full-width search with the same result.
    pub pruning: bool,
}

impl SearchConfig {
    pub fn full_width() -> Self {
        Self { pruning: false }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Best move found at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub position: usize,
    pub score: i32,
}

/// Work done by one search call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Sibling loops abandoned by the alpha-beta test
    pub cutoffs: u64,
}

/// Stateless minimax engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Optimal move for `mark`, which moves first and is maximized.
    ///
    /// Returns `None` when the board is already terminal (a completed line
    /// or no empty cell), since there is nothing to choose.
    ///
    /// ```
    /// use oxo::{search::Minimax, tictactoe::{BoardState, Player}};
    ///
    /// let board = BoardState::from_string("XX..O....").unwrap();
    /// let result = Minimax::default().best_move(&board, Player::O).unwrap();
    /// assert_eq!(result.position, 2);
    /// ```
    pub fn best_move(&self, board: &BoardState, mark: Player) -> Option<SearchResult> {
        self.search(board, mark).map(|(result, _)| result)
    }

    /// Same as [`Minimax::best_move`], also returning node and cutoff counts.
    pub fn search(&self, board: &BoardState, mark: Player) -> Option<(SearchResult, SearchStats)> {
        let mut ctx = SearchContext {
            scratch: board.cells,
            maximizer: mark,
            pruning: self.config.pruning,
            stats: SearchStats::default(),
        };

        let root = ctx.minimax(mark, i32::MIN, i32::MAX, true);
        debug_assert_eq!(ctx.scratch, board.cells, "scratch board not restored");

        let position = root.position?;
        let result = SearchResult {
            position,
            score: root.score,
        };

        tracing::debug!(
            board = %board.encode(),
            mark = %mark,
            position,
            score = result.score,
            nodes = ctx.stats.nodes,
            cutoffs = ctx.stats.cutoffs,
            pruning = self.config.pruning,
            "search complete"
        );

        Some((result, ctx.stats))
    }
}

/// Score of a subtree and, below a non-terminal node, the move that earned it
#[derive(Debug, Clone, Copy)]
struct Node {
    score: i32,
    position: Option<usize>,
}

impl Node {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

struct SearchContext {
    scratch: [Cell; CELL_COUNT],
    maximizer: Player,
    pruning: bool,
    stats: SearchStats,
}

impl SearchContext {
    fn terminal_score(&self) -> Option<i32> {
        match LineAnalyzer::winner(&self.scratch) {
            Some(winner) if winner == self.maximizer => Some(WIN_SCORE),
            Some(_) => Some(LOSS_SCORE),
            None if !self.scratch.contains(&Cell::Empty) => Some(DRAW_SCORE),
            None => None,
        }
    }

    fn minimax(
        &mut self,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Node {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score() {
            return Node::leaf(score);
        }

        let mut best = Node::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for pos in 0..CELL_COUNT {
            if self.scratch[pos] != Cell::Empty {
                continue;
            }

            self.scratch[pos] = to_move.to_cell();
            let score = self
                .minimax(to_move.opponent(), alpha, beta, !maximizing)
                .score;
            self.scratch[pos] = Cell::Empty;

            if maximizing {
                if score > best.score {
                    best = Node {
                        score,
                        position: Some(pos),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = Node {
                        score,
                        position: Some(pos),
                    };
                }
                beta = beta.min(best.score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
