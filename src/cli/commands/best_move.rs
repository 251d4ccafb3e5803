//! Best-move command - Ask the engine for its choice in a single position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_search_result, print_section},
    config::{DEFAULT_MAX_DEPTH, EngineConfig, SearchStrategy},
    search::Engine,
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Print the engine's move for a position")]
pub struct BestMoveArgs {
    /// Position as nine cells in row-major order (`X` human, `O` computer,
    /// `.` empty), optionally suffixed with `_X` or `_O` for the side to move
    pub state: String,

    /// Plies to search
    #[arg(long, short = 'd', default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: u32,

    /// Search every node instead of pruning
    #[arg(long, conflicts_with = "parallel")]
    pub no_pruning: bool,

    /// Search the root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl BestMoveArgs {
    fn strategy(&self) -> SearchStrategy {
        if self.parallel {
            SearchStrategy::ParallelRoot
        } else if self.no_pruning {
            SearchStrategy::Full
        } else {
            SearchStrategy::AlphaBeta
        }
    }
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let state = BoardState::from_string(&args.state)
        .with_context(|| format!("Failed to parse position '{}'", args.state))?;
    let engine = Engine::new(
        EngineConfig::default()
            .with_max_depth(args.depth)
            .with_strategy(args.strategy()),
    )?;
    let result = engine.search(&state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_section("Position");
    print_board(&state);
    print_kv("To move", &state.turn.to_string());
    if let Some(outcome) = state.winner() {
        print_kv("Outcome", &outcome.to_string());
    }

    print_section("Search");
    print_kv("Strategy", &format!("{:?}", args.strategy()));
    print_search_result(&result);
    Ok(())
}
