//! Evaluate command - Measure the engine against a baseline opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    config::{DEFAULT_MAX_DEPTH, EngineConfig, SearchStrategy},
    pipeline::{EngineOpponent, MatchConfig, MatchRunner, OpponentKind, ProgressObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against an opponent and report the results")]
pub struct EvaluateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Opponent seated as the human
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plies the engine searches
    #[arg(long, short = 'd', default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: u32,

    /// Search routine the engine uses
    #[arg(long, value_enum, default_value_t = SearchStrategy::AlphaBeta)]
    pub strategy: SearchStrategy,

    /// Let the human seat open every game instead of alternating
    #[arg(long)]
    pub no_alternate: bool,

    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Write the summary as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let engine_config = EngineConfig::default()
        .with_max_depth(args.depth)
        .with_strategy(args.strategy);
    let mut engine = EngineOpponent::new("engine", engine_config)?;
    let mut opponent = args.opponent.build(engine_config)?;

    let match_config = MatchConfig::default()
        .with_games(args.games)
        .with_alternate_first(!args.no_alternate)
        .with_seed(args.seed);
    let mut runner = MatchRunner::new(match_config);
    if !args.quiet {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    let summary = runner.run(&mut engine, opponent.as_mut())?;

    print_section("Evaluation Results");
    print_kv("Engine", &format!("depth {} ({:?})", args.depth, args.strategy));
    print_kv("Opponent", &summary.human);
    print_kv("Games", &summary.games.to_string());
    print_kv("Engine wins", &summary.computer_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Engine losses", &summary.human_wins.to_string());
    print_kv(
        "Unbeaten rate",
        &format!("{:.1}%", summary.computer_unbeaten_rate() * 100.0),
    );

    if let Some(path) = &args.output {
        summary.save(path)?;
        println!("\nSummary written to {}", path.display());
    }
    Ok(())
}
