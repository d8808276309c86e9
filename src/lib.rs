//! # Puzzle League
//!
//! A tile-matching puzzle: a 6×6 grid of colored blocks, a cursor that swaps
//! two horizontally adjacent blocks, automatic clearing of runs of three or
//! more, gravity collapse, and chain reactions until the board stabilizes.
//! A breadth-first solver computes the minimum number of swaps needed to
//! clear the whole board.
//!
//! ## Modules
//!
//! - [`game`] — Board model and the match-clear-collapse engine
//! - [`solver`] — Breadth-first search for a minimal clearing sequence
//! - [`session`] — Game session: cursor, move counter, command handling
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod solver;
pub mod ui;
