//! Ports (trait boundaries) between the game core and whatever drives it.
//!
//! The core never asks where a move comes from or who watches a match; front
//! ends, opponents and reporters plug in through these traits.

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::Observer;
