//! Common test utilities for the tic-tac-toe test suite.
//!
//! Enumerates reachable positions and plays random games so the property
//! tests can sweep the whole game instead of a handful of hand-picked boards.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tictactoe_negamax::{BoardState, Side, tictactoe::Cell};

/// Every position reachable by legal play from the empty board with `first`
/// to move, terminal positions included.
pub fn reachable_states(first: Side) -> Vec<BoardState> {
    let root = BoardState::new_with_side(first);
    let mut seen = HashSet::from([root]);
    let mut stack = vec![root];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        states.push(state);
        if state.is_terminal() {
            continue;
        }
        for mv in state.legal_moves() {
            let child = state.apply_move(mv).unwrap();
            if seen.insert(child) {
                stack.push(child);
            }
        }
    }

    states
}

/// Reachable positions for both opening sides
pub fn all_reachable_states() -> Vec<BoardState> {
    let mut states = reachable_states(Side::Human);
    states.extend(reachable_states(Side::Computer));
    states
}

/// Sequence of positions from a uniformly random game, empty board first
pub fn random_playout(first: Side, seed: u64) -> Vec<BoardState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = BoardState::new_with_side(first);
    let mut trace = vec![state];
    while !state.is_terminal() {
        let mv = *state.legal_moves().choose(&mut rng).unwrap();
        state = state.apply_move(mv).unwrap();
        trace.push(state);
    }
    trace
}

/// Winner worked out straight from the cells, independent of the crate's
/// line bookkeeping
pub fn naive_winner(state: &BoardState) -> Option<Side> {
    const TRIPLES: [[(usize, usize); 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    TRIPLES.iter().find_map(|triple| {
        let [a, b, c] = triple.map(|(row, col)| state.cells[row][col]);
        if a != Cell::Empty && a == b && b == c {
            a.side()
        } else {
            None
        }
    })
}

pub fn is_full(state: &BoardState) -> bool {
    state.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
}
