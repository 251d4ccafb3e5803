//! Move sources used as match opponents

use clap::ValueEnum;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::EngineConfig,
    ports::MoveSource,
    search::Engine,
    tictactoe::{BoardState, LineSummary, Move, Outcome, Side},
};

/// Opponent families selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    Random,
    Defensive,
    Engine,
}

impl OpponentKind {
    /// Build a boxed opponent of this kind; `engine` only matters for
    /// [`OpponentKind::Engine`].
    pub fn build(self, engine: EngineConfig) -> Result<Box<dyn MoveSource>> {
        let source: Box<dyn MoveSource> = match self {
            OpponentKind::Random => Box::new(RandomOpponent::new("random")),
            OpponentKind::Defensive => Box::new(DefensiveOpponent::new("defensive")),
            OpponentKind::Engine => Box::new(EngineOpponent::new("engine", engine)?),
        };
        Ok(source)
    }
}

/// The alpha-beta engine as a move source
pub struct EngineOpponent {
    name: String,
    engine: Engine,
}

impl EngineOpponent {
    /// # Errors
    ///
    /// Returns error if the engine configuration is invalid.
    pub fn new(name: impl Into<String>, config: EngineConfig) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            engine: Engine::new(config)?,
        })
    }
}

impl MoveSource for EngineOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &BoardState) -> Result<Move> {
        self.engine.search(state)?.best_move.ok_or(Error::GameOver)
    }
}

/// Uniformly random legal moves (baseline)
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &BoardState) -> Result<Move> {
        if state.is_terminal() {
            return Err(Error::GameOver);
        }
        state
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::GameOver)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Wins when it can, blocks when it must, otherwise plays at random
pub struct DefensiveOpponent {
    name: String,
    rng: StdRng,
}

impl DefensiveOpponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Whether `side` placing a mark at `mv` would complete a line
fn completes_line(state: &BoardState, side: Side, mv: Move) -> bool {
    let mut cells = state.cells;
    cells[mv.row][mv.col] = side.to_cell();
    LineSummary::compute(&cells).outcome == Some(Outcome::Win(side))
}

impl MoveSource for DefensiveOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &BoardState) -> Result<Move> {
        if state.is_terminal() {
            return Err(Error::GameOver);
        }
        let moves = state.legal_moves();
        let me = state.turn;

        if let Some(&mv) = moves.iter().find(|&&mv| completes_line(state, me, mv)) {
            return Ok(mv);
        }
        if let Some(&mv) = moves
            .iter()
            .find(|&&mv| completes_line(state, me.opponent(), mv))
        {
            return Ok(mv);
        }
        moves.choose(&mut self.rng).copied().ok_or(Error::GameOver)
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_opponent_is_reproducible() {
        let state = BoardState::new();
        let mut a = RandomOpponent::with_seed("a", 7);
        let mut b = RandomOpponent::with_seed("b", 7);
        for _ in 0..5 {
            assert_eq!(
                a.select_move(&state).unwrap(),
                b.select_move(&state).unwrap()
            );
        }
    }

    #[test]
    fn test_random_opponent_plays_legal_moves() {
        let state = BoardState::from_string("XO.XO....").unwrap();
        let mut random = RandomOpponent::with_seed("random", 3);
        for _ in 0..20 {
            let mv = random.select_move(&state).unwrap();
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_defensive_prefers_win_then_block() {
        // O O .
        // X X .
        // X . .
        let win = BoardState::from_string("OO.XX.X.._O").unwrap();
        let mut defensive = DefensiveOpponent::with_seed("defensive", 1);
        assert_eq!(defensive.select_move(&win).unwrap(), Move::new(0, 2));

        let block = BoardState::from_string("XX..O....").unwrap();
        assert_eq!(defensive.select_move(&block).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_terminal_state_has_no_move() {
        let state = BoardState::from_string("XXXOO...._O").unwrap();
        let mut random = RandomOpponent::with_seed("random", 0);
        let mut engine = EngineOpponent::new("engine", EngineConfig::default()).unwrap();
        assert!(matches!(random.select_move(&state), Err(Error::GameOver)));
        assert!(matches!(engine.select_move(&state), Err(Error::GameOver)));
    }
}
