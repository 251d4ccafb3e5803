//! Adversarial search over board states
//!
//! All routines follow the negamax convention: a score is always seen from
//! the side to move, and a child's score is negated on the way up. Moves are
//! tried in row-major order and only a strictly better score replaces the
//! current best, so the first of several equally good moves wins.

mod alphabeta;
mod full;
mod parallel;

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    config::{EngineConfig, MAX_PLIES, SearchStrategy},
    tictactoe::{BoardState, Move},
};

pub use parallel::parallel_best_move;

/// Bound larger than any reachable score
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Sibling lists abandoned after a beta cutoff
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Best move and its score for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    /// `None` when the searched position was already terminal
    pub best_move: Option<Move>,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Alpha-beta negamax from `state`, `max_depth` plies deep.
///
/// On a terminal state (or `max_depth == 0`) the result carries the static
/// evaluation and no move. Depths beyond [`MAX_PLIES`] search as
/// `MAX_PLIES`, which already reaches the end of every game.
///
/// # Errors
///
/// Only fails if a generated successor breaks the board invariants, which
/// indicates a bug.
pub fn best_move(state: &BoardState, max_depth: u32) -> Result<SearchResult> {
    let max_depth = max_depth.min(MAX_PLIES);
    let mut stats = SearchStats::default();
    let (score, best_move) = alphabeta::negamax(
        state,
        max_depth,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        &mut stats,
    )?;
    let result = SearchResult {
        score,
        best_move,
        depth: max_depth,
        stats,
    };
    log_result("alpha-beta", state, &result);
    Ok(result)
}

/// Negamax without pruning; visits every node up to `max_depth`.
///
/// Produces the same score and move as [`best_move`].
pub fn full_search(state: &BoardState, max_depth: u32) -> Result<SearchResult> {
    let max_depth = max_depth.min(MAX_PLIES);
    let mut stats = SearchStats::default();
    let (score, best_move) = full::negamax(state, max_depth, &mut stats)?;
    let result = SearchResult {
        score,
        best_move,
        depth: max_depth,
        stats,
    };
    log_result("full", state, &result);
    Ok(result)
}

fn log_result(strategy: &str, state: &BoardState, result: &SearchResult) {
    debug!(
        strategy,
        state = %state.encode(),
        depth = result.depth,
        score = result.score,
        best_move = ?result.best_move,
        nodes = result.stats.nodes,
        cutoffs = result.stats.cutoffs,
        "search finished"
    );
}

/// Search engine bound to an [`EngineConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick the best move for the side to move in `state`
    pub fn search(&self, state: &BoardState) -> Result<SearchResult> {
        let depth = self.config.max_depth;
        match self.config.strategy {
            SearchStrategy::AlphaBeta => best_move(state, depth),
            SearchStrategy::Full => full_search(state, depth),
            SearchStrategy::ParallelRoot => parallel_best_move(state, depth),
        }
    }
}
