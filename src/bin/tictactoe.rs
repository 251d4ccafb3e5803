//! Tic-Tac-Toe CLI - play against, query and evaluate the negamax engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games in the terminal
//! - Asking the engine for its move in a given position
//! - Evaluating the engine against baseline opponents

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tictactoe_negamax::cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe against a negamax engine", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(commands::play::PlayArgs),

    /// Print the engine's move for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Play the engine against an opponent and report the results
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
    }
}
