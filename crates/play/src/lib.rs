//! Terminal driver for the chess core
//!
//! This crate provides:
//! - Interactive play against an engine on stdin/stdout
//! - Self-play matches between engines with a JSON summary
//! - Configuration loading for both
//!
//! # Usage
//!
//! ```bash
//! # Play White against the greedy engine
//! cargo run -p chess_play -- play
//!
//! # Twenty greedy vs random games with a fixed seed
//! cargo run -p chess_play -- --seed 7 selfplay --white greedy --black random --games 20
//! ```

mod config;
mod interactive;
mod match_runner;
mod results;

pub use config::*;
pub use interactive::*;
pub use match_runner::*;
pub use results::*;

#[cfg(test)]
mod match_runner_tests;
