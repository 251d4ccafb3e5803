//! Root-parallel alpha-beta search
//!
//! Each root move gets its own full-window alpha-beta search on the rayon
//! pool. Branches share nothing; their results are merged in row-major order
//! afterwards, so the choice matches the sequential search.

use rayon::prelude::*;

use super::{SCORE_INFINITY, SearchResult, SearchStats, alphabeta, log_result};
use crate::{
    Result,
    config::MAX_PLIES,
    tictactoe::{BoardState, Move},
};

struct RootBranch {
    mv: Move,
    score: i32,
    stats: SearchStats,
}

/// Parallel counterpart of [`best_move`](super::best_move).
///
/// # Errors
///
/// Only fails if a generated successor breaks the board invariants.
pub fn parallel_best_move(state: &BoardState, max_depth: u32) -> Result<SearchResult> {
    let max_depth = max_depth.min(MAX_PLIES);
    if max_depth == 0 || state.is_terminal() {
        return Ok(SearchResult {
            score: state.evaluate(max_depth),
            best_move: None,
            depth: max_depth,
            stats: SearchStats {
                nodes: 1,
                cutoffs: 0,
            },
        });
    }

    let branches = state
        .legal_moves()
        .into_par_iter()
        .map(|mv| -> Result<RootBranch> {
            let child = state.apply_move(mv)?;
            let mut stats = SearchStats::default();
            let (child_score, _) = alphabeta::negamax(
                &child,
                max_depth - 1,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                &mut stats,
            )?;
            Ok(RootBranch {
                mv,
                score: -child_score,
                stats,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stats = SearchStats {
        nodes: 1,
        cutoffs: 0,
    };
    let mut best_score = -SCORE_INFINITY;
    let mut best_move = None;
    for branch in &branches {
        stats += branch.stats;
        if branch.score > best_score {
            best_score = branch.score;
            best_move = Some(branch.mv);
        }
    }

    let result = SearchResult {
        score: best_score,
        best_move,
        depth: max_depth,
        stats,
    };
    log_result("parallel-root", state, &result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::best_move;

    #[test]
    fn test_matches_sequential_search() {
        for label in ["XX..O....", "X...O...X_O", "X........", "XO.......", "OO.XX.X.._O"] {
            let state = BoardState::from_string(label).unwrap();
            for depth in [1, 2, 4, 8] {
                let sequential = best_move(&state, depth).unwrap();
                let parallel = parallel_best_move(&state, depth).unwrap();
                assert_eq!(sequential.score, parallel.score, "{label} depth {depth}");
                assert_eq!(
                    sequential.best_move, parallel.best_move,
                    "{label} depth {depth}"
                );
            }
        }
    }
}
