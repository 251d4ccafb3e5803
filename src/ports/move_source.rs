//! Move source port - anything that can choose a move for a position

use crate::{
    Result,
    tictactoe::{BoardState, Move},
};

/// Chooses moves for whichever side is to move.
///
/// Implemented by the search engine, by baseline opponents, and by front ends
/// relaying a person's choice.
///
/// # Examples
///
/// ```
/// use tictactoe_negamax::{
///     ports::MoveSource,
///     tictactoe::{BoardState, Move},
/// };
///
/// /// Always takes the first free cell
/// struct FirstFree;
///
/// impl MoveSource for FirstFree {
///     fn name(&self) -> &str {
///         "first-free"
///     }
///
///     fn select_move(&mut self, state: &BoardState) -> tictactoe_negamax::Result<Move> {
///         state
///             .legal_moves()
///             .first()
///             .copied()
///             .ok_or(tictactoe_negamax::Error::GameOver)
///     }
/// }
/// ```
pub trait MoveSource: Send {
    /// Name used in summaries and logs
    fn name(&self) -> &str;

    /// Select a move for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if `state` is terminal or the source cannot decide.
    fn select_move(&mut self, state: &BoardState) -> Result<Move>;

    /// Seed the source's random number generator, if it has one.
    ///
    /// # Default Implementation
    ///
    /// Does nothing; deterministic sources ignore the seed.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
