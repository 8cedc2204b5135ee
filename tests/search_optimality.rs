//! Optimality and pruning properties of the minimax engine.

mod common;

use std::collections::HashMap;

use common::{game_value, reachable_positions};
use oxo::{
    search::{DRAW_SCORE, LOSS_SCORE, Minimax, SearchConfig, WIN_SCORE},
    tictactoe::{BoardState, Outcome, Player},
};

fn non_terminal_positions() -> Vec<BoardState> {
    reachable_positions()
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect()
}

#[test]
fn never_chooses_an_occupied_cell() {
    let engine = Minimax::default();
    for state in non_terminal_positions() {
        for mark in [Player::X, Player::O] {
            let result = engine
                .best_move(&state, mark)
                .expect("non-terminal board has a move");
            assert!(
                state.is_empty(result.position),
                "{} chose occupied {} for {mark}",
                state.encode(),
                result.position
            );
        }
    }
}

#[test]
fn chosen_move_keeps_the_game_theoretic_value() {
    let engine = Minimax::default();
    let mut memo = HashMap::new();

    for state in non_terminal_positions() {
        let mark = state.to_move;
        let best_value = game_value(state, mark, &mut memo);
        let result = engine.best_move(&state, mark).unwrap();
        let after = state.make_move(result.position).unwrap();

        assert_eq!(
            game_value(after, mark, &mut memo),
            best_value,
            "{} -> {} gives away value",
            state.encode(),
            result.position
        );
        let expected_score = match best_value {
            1 => WIN_SCORE,
            -1 => LOSS_SCORE,
            _ => DRAW_SCORE,
        };
        assert_eq!(result.score, expected_score, "{}", state.encode());
    }
}

#[test]
fn pruning_never_changes_the_answer() {
    let pruned = Minimax::default();
    let full = Minimax::new(SearchConfig::full_width());

    for state in non_terminal_positions() {
        for mark in [Player::X, Player::O] {
            assert_eq!(
                pruned.best_move(&state, mark),
                full.best_move(&state, mark),
                "pruning changed the result on {} for {mark}",
                state.encode()
            );
        }
    }
}

#[test]
fn engine_against_itself_draws() {
    let engine = Minimax::default();
    for first in [Player::X, Player::O] {
        let mut board = BoardState::new_with_player(first);
        while let Some(result) = engine.best_move(&board, board.to_move) {
            board = board.make_move(result.position).unwrap();
        }
        assert_eq!(board.outcome(), Outcome::Draw, "{first} opening");
    }
}

#[test]
fn engine_never_loses_to_any_opponent_line() {
    // Engine plays O against every possible sequence of X moves.
    fn explore(board: BoardState, engine: &Minimax) {
        match board.outcome() {
            Outcome::Win(Player::X) => panic!("engine lost: {}", board.encode()),
            Outcome::InProgress => {}
            _ => return,
        }
        if board.to_move == Player::O {
            let result = engine.best_move(&board, Player::O).unwrap();
            explore(board.make_move(result.position).unwrap(), engine);
        } else {
            for mv in board.legal_moves() {
                explore(board.make_move(mv).unwrap(), engine);
            }
        }
    }

    explore(BoardState::new(), &Minimax::default());
}

#[test]
fn center_opening_is_answered_with_a_corner() {
    let board = BoardState::new().make_move(4).unwrap();
    let result = Minimax::default().best_move(&board, Player::O).unwrap();
    assert!([0, 2, 6, 8].contains(&result.position));
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn blocks_forced_threat() {
    let board = BoardState::from_string("XX..O....").unwrap();
    assert_eq!(board.to_move, Player::O);
    let result = Minimax::default().best_move(&board, Player::O).unwrap();
    assert_eq!(result.position, 2);
}
