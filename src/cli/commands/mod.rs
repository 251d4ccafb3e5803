//! Subcommands of the `tictactoe` binary

pub mod best_move;
pub mod evaluate;
pub mod play;
