//! Observers for match pipelines
//!
//! Observers collect or report data while a match runs, without coupling the
//! runner to a particular output.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Outcome, Side},
};

/// Progress bar observer - Shows match progress with the running score
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    computer_wins: usize,
    draws: usize,
    human_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            computer_wins: 0,
            draws: 0,
            human_wins: 0,
        }
    }

    fn message(&self) -> String {
        format!(
            "C:{} D:{} H:{}",
            self.computer_wins, self.draws, self.human_wins
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Side::Computer) => self.computer_wins += 1,
            Outcome::Win(Side::Human) => self.human_wins += 1,
            Outcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
