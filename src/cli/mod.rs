//! CLI infrastructure for the tic-tac-toe engine
//!
//! Commands for playing against the engine, querying its choice for a single
//! position, and measuring it against baseline opponents.

pub mod commands;
pub mod output;
