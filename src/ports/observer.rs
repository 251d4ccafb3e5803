//! Observer port - watching a series of games without coupling to output

use crate::{
    Result,
    tictactoe::{BoardState, Move, Outcome},
};

/// Observer trait for monitoring matches
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_move(game_num, before, mv)` - For each committed move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - Once at the end
///
/// All methods default to doing nothing.
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, _before: &BoardState, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when a game finishes; `game_num` counts from 1.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
