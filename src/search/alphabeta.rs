//! Depth-limited negamax with alpha-beta pruning

use tracing::trace;

use super::{SCORE_INFINITY, SearchStats};
use crate::{
    Result,
    tictactoe::{BoardState, Move},
};

/// Returns the score for the side to move and the move achieving it.
///
/// A child is searched with the window `(-beta, -max(alpha, best))`; once the
/// best score reaches `beta` the remaining siblings cannot matter to the
/// parent and are skipped.
pub(super) fn negamax(
    state: &BoardState,
    depth: u32,
    alpha: i32,
    beta: i32,
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
        let (child_score, _) = negamax(&child, depth - 1, -beta, -alpha.max(best_score), stats)?;
        let score = -child_score;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);

            if best_score >= beta {
                stats.cutoffs += 1;
                trace!(depth, %mv, score, beta, "beta cutoff");
                return Ok((best_score, best_move));
            }
        }
    }

    Ok((best_score, best_move))
}
