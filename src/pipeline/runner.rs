//! Playing games between two seated move sources

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{MoveSource, Observer},
    tictactoe::{Game, Outcome, Phase, Side},
};

/// Play one game to completion.
///
/// `computer` moves for [`Side::Computer`] and `human` for [`Side::Human`];
/// `first` opens. Observers hear about every committed move, tagged with
/// `game_num`.
///
/// # Errors
///
/// Returns error if either source fails or proposes an illegal move.
pub fn play_game(
    computer: &mut dyn MoveSource,
    human: &mut dyn MoveSource,
    first: Side,
    game_num: usize,
    observers: &mut [Box<dyn Observer>],
) -> Result<Game> {
    let mut game = Game::new(first);

    while let Phase::Turn(side) = game.phase() {
        let before = *game.board();
        let mv = match side {
            Side::Computer => computer.select_move(&before)?,
            Side::Human => human.select_move(&before)?,
        };
        game.play_as(side, mv)?;
        for observer in observers.iter_mut() {
            observer.on_move(game_num, &before, mv)?;
        }
    }

    Ok(game)
}

/// Settings for a series of games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub games: usize,
    /// Swap the opening side after every game, human first in game 1
    pub alternate_first: bool,
    /// Seed handed to both sources before the first game
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_alternate_first(mut self, alternate_first: bool) -> Self {
        self.alternate_first = alternate_first;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn first_player(&self, game_index: usize) -> Side {
        if self.alternate_first && game_index % 2 == 1 {
            Side::Computer
        } else {
            Side::Human
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            alternate_first: true,
            seed: None,
        }
    }
}

/// Tally of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Name of the source seated as the computer
    pub computer: String,
    /// Name of the source seated as the human
    pub human: String,
    pub games: usize,
    pub computer_wins: usize,
    pub human_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn new(computer: impl Into<String>, human: impl Into<String>) -> Self {
        Self {
            computer: computer.into(),
            human: human.into(),
            games: 0,
            computer_wins: 0,
            human_wins: 0,
            draws: 0,
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Side::Computer) => self.computer_wins += 1,
            Outcome::Win(Side::Human) => self.human_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Share of games the computer seat did not lose
    pub fn computer_unbeaten_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.computer_wins + self.draws) as f64 / self.games as f64
    }

    /// Save summary to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create summary '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

/// Runs a series of games between two move sources
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `config.games` games and tally the outcomes.
    ///
    /// # Errors
    ///
    /// Returns error if a source fails, proposes an illegal move, or an
    /// observer fails.
    pub fn run(
        &mut self,
        computer: &mut dyn MoveSource,
        human: &mut dyn MoveSource,
    ) -> Result<MatchSummary> {
        if let Some(seed) = self.config.seed {
            computer.set_rng_seed(seed);
            human.set_rng_seed(seed.wrapping_add(1));
        }

        let mut summary = MatchSummary::new(computer.name(), human.name());
        info!(
            computer = %summary.computer,
            human = %summary.human,
            games = self.config.games,
            "match started"
        );

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        for index in 0..self.config.games {
            let game_num = index + 1;
            let first = self.config.first_player(index);
            let game = play_game(computer, human, first, game_num, &mut self.observers)?;
            let outcome = game.outcome().ok_or_else(|| {
                crate::Error::invariant("game loop ended without an outcome")
            })?;

            debug!(game_num, %first, %outcome, moves = game.moves().len(), "game finished");
            summary.record(outcome);

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        info!(
            computer_wins = summary.computer_wins,
            human_wins = summary.human_wins,
            draws = summary.draws,
            "match finished"
        );
        Ok(summary)
    }
}
