//! Play command - Interactive game against the engine on stdin/stdout

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;

use crate::{
    Error,
    cli::output::render_board,
    config::{GameConfig, SearchStrategy},
    tictactoe::{Move, Outcome, Phase, Session, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine in the terminal")]
pub struct PlayArgs {
    /// Plies the engine searches (overrides the config file)
    #[arg(long, short = 'd')]
    pub depth: Option<u32>,

    /// Let the computer open every game
    #[arg(long)]
    pub computer_first: bool,

    /// Search routine the engine uses (overrides the config file)
    #[arg(long, value_enum)]
    pub strategy: Option<SearchStrategy>,

    /// JSON file with a game configuration
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.engine = config.engine.with_max_depth(depth);
        }
        if let Some(strategy) = self.strategy {
            config.engine = config.engine.with_strategy(strategy);
        }
        if self.computer_first {
            config = config.with_first_player(Side::Computer);
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = Session::new(args.game_config()?)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

/// Parse `row col` (spaces or a comma between) into a move
pub fn parse_move(input: &str) -> Result<Move> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        bail!("Expected 'row col', got '{input}'");
    }
    let row = parts[0]
        .parse()
        .map_err(|_| anyhow!("Invalid row '{}'", parts[0]))?;
    let col = parts[1]
        .parse()
        .map_err(|_| anyhow!("Invalid column '{}'", parts[1]))?;
    Ok(Move::new(row, col))
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Side::Human) => "You win!",
        Outcome::Win(Side::Computer) => "Computer wins.",
        Outcome::Draw => "Draw.",
    }
}

/// Drive a session from `input` until the player quits or input runs out.
///
/// Rejected moves are reported and asked for again; any other error ends the
/// session.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        match session.phase() {
            Phase::Turn(Side::Computer) => {
                let (result, _) = session.play_computer()?;
                if let Some(mv) = result.best_move {
                    writeln!(out, "Computer plays {mv} (score {})", result.score)?;
                }
            }
            Phase::Turn(Side::Human) => {
                write!(out, "\n{}", render_board(session.game().board()))?;
                write!(out, "Your move (row col, q to quit): ")?;
                out.flush()?;

                let Some(line) = lines.next() else { break };
                let line = line?;
                let line = line.trim();
                if matches!(line, "q" | "quit") {
                    break;
                }

                let mv = match parse_move(line) {
                    Ok(mv) => mv,
                    Err(err) => {
                        writeln!(out, "{err}")?;
                        continue;
                    }
                };
                match session.play_human(mv) {
                    Ok(_) => {}
                    Err(err @ Error::InvalidMove { .. }) => writeln!(out, "{err}")?,
                    Err(err) => return Err(err.into()),
                }
            }
            Phase::GameOver(outcome) => {
                write!(out, "\n{}", render_board(session.game().board()))?;
                writeln!(out, "{}", describe(outcome))?;
                let score = session.scoreboard();
                writeln!(
                    out,
                    "Wins: {}  Losses: {}  Draws: {}",
                    score.wins, score.losses, score.draws
                )?;
                write!(out, "Play again? [y/N]: ")?;
                out.flush()?;

                let again = match lines.next() {
                    Some(line) => matches!(line?.trim(), "y" | "Y" | "yes"),
                    None => false,
                };
                if !again {
                    break;
                }
                session.new_game();
            }
        }
    }

    let score = session.scoreboard();
    writeln!(
        out,
        "\nFinal score after {} game(s): {} won, {} lost, {} drawn",
        score.games(),
        score.wins,
        score.losses,
        score.draws
    )?;
    Ok(())
}
