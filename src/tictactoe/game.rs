//! Live game management: the one mutable board a front end owns

use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::{BoardState, Move, Outcome, Side};
use crate::{
    config::GameConfig,
    search::{Engine, SearchResult},
};

/// A move together with the side that played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub side: Side,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Turn(Side),
    GameOver(Outcome),
}

/// A single game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    board: BoardState,
    moves: Vec<PlayedMove>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Create a new game with `first` to move
    pub fn new(first: Side) -> Self {
        let initial = BoardState::new_with_side(first);
        Game {
            initial,
            board: initial,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The live board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::GameOver(outcome),
            None => Phase::Turn(self.board.turn),
        }
    }

    /// Commit a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once the game has
    /// ended, or [`Error::InvalidMove`](crate::Error::InvalidMove) for an
    /// out-of-range or occupied cell. A rejected move leaves the game as it
    /// was.
    pub fn play(&mut self, mv: Move) -> crate::Result<Phase> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let side = self.board.turn;
        self.board = self.board.apply_move(mv)?;
        self.moves.push(PlayedMove { mv, side });
        self.outcome = self.board.winner();

        info!(%side, %mv, board = %self.board.encode(), "move committed");
        if let Some(outcome) = self.outcome {
            info!(%outcome, moves = self.moves.len(), "game over");
        }

        Ok(self.phase())
    }

    /// Commit a move, checking that `side` is the one to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotYourTurn`](crate::Error::NotYourTurn) if `side` is
    /// not to move, otherwise as [`play`](Self::play).
    pub fn play_as(&mut self, side: Side, mv: Move) -> crate::Result<Phase> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        if self.board.turn != side {
            return Err(crate::Error::NotYourTurn {
                expected: side,
            });
        }
        self.play(mv)
    }
}

/// Results across the games of a session, from the human's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::Human) => self.wins += 1,
            Outcome::Win(Side::Computer) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

/// A human-versus-computer session: the current game, the engine and the
/// running score.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    engine: Engine,
    game: Game,
    scoreboard: Scoreboard,
    recorded: bool,
}

impl Session {
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        let engine = Engine::new(config.engine)?;
        Ok(Session {
            config,
            engine,
            game: Game::new(config.first_player),
            scoreboard: Scoreboard::default(),
            recorded: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Apply the human's chosen cell.
    ///
    /// # Errors
    ///
    /// Returns error if it is not the human's turn, the game is over or the
    /// cell is not available.
    pub fn play_human(&mut self, mv: Move) -> crate::Result<Phase> {
        let phase = self.game.play_as(Side::Human, mv)?;
        self.settle();
        Ok(phase)
    }

    /// Let the engine pick and commit the computer's move.
    ///
    /// # Errors
    ///
    /// Returns error if it is not the computer's turn or the game is over.
    pub fn play_computer(&mut self) -> crate::Result<(SearchResult, Phase)> {
        match self.game.phase() {
            Phase::GameOver(_) => return Err(crate::Error::GameOver),
            Phase::Turn(Side::Human) => {
                return Err(crate::Error::NotYourTurn {
                    expected: Side::Computer,
                });
            }
            Phase::Turn(Side::Computer) => {}
        }

        let result = self.engine.search(self.game.board())?;
        let mv = result.best_move.ok_or(crate::Error::GameOver)?;
        let phase = self.game.play_as(Side::Computer, mv)?;
        self.settle();
        Ok((result, phase))
    }

    /// Abandon the current game (unrecorded if unfinished) and start another
    pub fn new_game(&mut self) {
        self.game = Game::new(self.config.first_player);
        self.recorded = false;
    }

    fn settle(&mut self) {
        if self.recorded {
            return;
        }
        if let Some(outcome) = self.game.outcome() {
            self.scoreboard.record(outcome);
            self.recorded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_play_and_history() {
        let mut game = Game::new(Side::Human);
        assert_eq!(game.phase(), Phase::Turn(Side::Human));

        let phase = game.play(Move::new(0, 0)).unwrap();
        assert_eq!(phase, Phase::Turn(Side::Computer));
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.moves()[0].side, Side::Human);
        assert_eq!(game.initial, BoardState::new());
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::new(Side::Human);
        game.play(Move::new(1, 1)).unwrap();
        let before = *game.board();

        assert!(game.play(Move::new(1, 1)).is_err());
        assert!(game.play(Move::new(3, 1)).is_err());
        assert_eq!(*game.board(), before);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = Game::new(Side::Human);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Move::new(row, col)).unwrap();
        }
        assert_eq!(game.phase(), Phase::GameOver(Outcome::Win(Side::Human)));
        assert!(matches!(
            game.play(Move::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_play_as_checks_turn() {
        let mut game = Game::new(Side::Human);
        assert!(matches!(
            game.play_as(Side::Computer, Move::new(0, 0)),
            Err(crate::Error::NotYourTurn {
                expected: Side::Computer
            })
        ));
    }

    #[test]
    fn test_scoreboard_record() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.record(Outcome::Win(Side::Human));
        scoreboard.record(Outcome::Draw);
        scoreboard.record(Outcome::Win(Side::Computer));
        scoreboard.record(Outcome::Draw);
        assert_eq!(
            scoreboard,
            Scoreboard {
                wins: 1,
                losses: 1,
                draws: 2
            }
        );
        assert_eq!(scoreboard.games(), 4);
    }
}
