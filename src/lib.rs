//! Tic-Tac-Toe with a depth-limited negamax opponent
//!
//! This crate provides:
//! - Board representation, move rules and validation
//! - A static evaluation scored from the side to move
//! - Negamax search with alpha-beta pruning, a full-width reference search
//!   and a root-parallel variant
//! - A live game session with a running scoreboard
//! - Baseline opponents and a match runner for evaluating the engine

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use config::{EngineConfig, GameConfig, SearchStrategy};
pub use error::{Error, Result};
pub use search::{Engine, SearchResult, SearchStats, best_move, full_search, parallel_best_move};
pub use tictactoe::{BoardState, Move, Outcome, Side};
