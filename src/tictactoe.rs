//! Tic-Tac-Toe board, rules and live game management

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BoardState, Cell, Move, Outcome, Side, THREAT_SCORE, WIN_SCORE};
pub use game::{Game, Phase, PlayedMove, Scoreboard, Session};
pub use lines::{LINES, Line, LineStats, LineSummary};
