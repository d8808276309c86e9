//! Core puzzle logic: board representation and the match-clear-collapse
//! engine that resolves chain reactions after a swap.

mod board;
pub mod matcher;

pub use board::{Board, Cell, HEIGHT, WIDTH};
