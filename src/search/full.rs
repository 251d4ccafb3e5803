//! Reference negamax without pruning

use super::{SCORE_INFINITY, SearchStats};
use crate::{
    Result,
    tictactoe::{BoardState, Move},
};

pub(super) fn negamax(
    state: &BoardState,
    depth: u32,
    stats: &mut SearchStats,
) -> Result<(i32, Option<Move>)> {
    stats.nodes += 1;

    if depth == 0 || state.is_terminal() {
        return Ok((state.evaluate(depth), None));
    }

    let mut best_score = -SCORE_INFINITY;
    let mut best_move = None;

    for mv in state.legal_moves() {
        let child = state.apply_move(mv)?;
        let (child_score, _) = negamax(&child, depth - 1, stats)?;
        let score = -child_score;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    Ok((best_score, best_move))
}
