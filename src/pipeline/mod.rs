//! Match pipeline: seating two move sources and playing a series of games
//!
//! This module provides:
//! - Opponents (engine, random and defensive baselines)
//! - A match runner that alternates who moves first
//! - Observers reporting progress while a match runs

pub mod observers;
pub mod opponents;
pub mod runner;

pub use observers::ProgressObserver;
pub use opponents::{DefensiveOpponent, EngineOpponent, OpponentKind, RandomOpponent};
pub use runner::{MatchConfig, MatchRunner, MatchSummary, play_game};

pub use crate::ports::{MoveSource, Observer};
