//! Driver configuration, read from an optional TOML file

use anyhow::{Context, Result};
use chess_core::{Color, Engine};
use clap::ValueEnum;
use greedy_engine::{GreedyEngine, RandomEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which move selector plays an automated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Best capture by piece value, random otherwise
    Greedy,
    /// Uniformly random move
    Random,
}

impl EngineKind {
    /// Builds the engine, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Engine> {
        match (self, seed) {
            (EngineKind::Greedy, Some(s)) => Box::new(GreedyEngine::with_seed(s)),
            (EngineKind::Greedy, None) => Box::new(GreedyEngine::new()),
            (EngineKind::Random, Some(s)) => Box::new(RandomEngine::with_seed(s)),
            (EngineKind::Random, None) => Box::new(RandomEngine::new()),
        }
    }
}

/// Side as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Side {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Side the human plays in interactive games
    pub human_color: Side,
    /// Engine answering the human
    pub opponent: EngineKind,
    /// Fixed seed for the engines' random choices (None = entropy)
    pub seed: Option<u64>,
    /// Self-play games stop as unfinished after this many plies
    pub max_plies: u32,
    /// Number of self-play games
    pub games: u32,
    /// Tracing filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_color: Side::White,
            opponent: EngineKind::Greedy,
            seed: None,
            max_plies: 200,
            games: 10,
            log_level: "info".to_string(),
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid config")
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("in {}", path.display()))
    }
}
