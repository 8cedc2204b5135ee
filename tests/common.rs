//! Shared helpers for the integration tests.

use std::collections::{HashMap, HashSet};

use oxo::tictactoe::{BoardState, Cell, Outcome, Player};

/// Every position reachable from an empty board with either mark opening,
/// terminal positions included.
#[allow(dead_code)]
pub fn reachable_positions() -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut stack = vec![
        BoardState::new_with_player(Player::X),
        BoardState::new_with_player(Player::O),
    ];
    let mut positions = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        positions.push(state);
        for mv in state.legal_moves() {
            stack.push(state.make_move(mv).expect("legal move"));
        }
    }

    positions
}

/// Every assignment of the three cell values to nine cells, legal or not.
#[allow(dead_code)]
pub fn all_cell_grids() -> impl Iterator<Item = [Cell; 9]> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            code /= 3;
        }
        cells
    })
}

/// Game-theoretic value of `state` for `perspective` (+1 win, 0 draw,
/// -1 loss), by plain memoized minimax over `make_move`.
#[allow(dead_code)]
pub fn game_value(
    state: BoardState,
    perspective: Player,
    memo: &mut HashMap<(BoardState, Player), i32>,
) -> i32 {
    if let Some(&value) = memo.get(&(state, perspective)) {
        return value;
    }

    let value = match state.outcome() {
        Outcome::Win(winner) if winner == perspective => 1,
        Outcome::Win(_) => -1,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let children = state
                .legal_moves()
                .into_iter()
                .map(|mv| game_value(state.make_move(mv).expect("legal move"), perspective, memo));
            if state.to_move == perspective {
                children.max().unwrap_or(0)
            } else {
                children.min().unwrap_or(0)
            }
        }
    };

    memo.insert((state, perspective), value);
    value
}
