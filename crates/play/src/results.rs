//! Match results and their JSON summary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::Side;
use chess_core::Color;

/// How a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameOutcome {
    /// `side` was to move and had no moves left
    NoMoves { side: Side },
    /// Neither side ran out of moves before the ply limit
    PlyLimit,
}

impl GameOutcome {
    /// Result for the engine playing `color`. Running out of moves loses.
    pub fn result_for(self, color: Color) -> GameResult {
        match self {
            GameOutcome::NoMoves { side } if Color::from(side) == color => GameResult::Loss,
            GameOutcome::NoMoves { .. } => GameResult::Win,
            GameOutcome::PlyLimit => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::NoMoves { side } => write!(f, "{} has no moves", Color::from(*side)),
            GameOutcome::PlyLimit => write!(f, "ply limit"),
        }
    }
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A single game in a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntry {
    pub engine1_white: bool,
    pub outcome: GameOutcome,
    pub plies: u32,
}

/// Everything a self-play run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub seed: Option<u64>,
    pub max_plies: u32,
    pub result: MatchResult,
    pub games: Vec<GameEntry>,
}

impl MatchSummary {
    /// Save summary to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("failed to serialize summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load summary from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "{} games, ply limit {}\n\n",
            self.result.total_games(),
            self.max_plies
        ));

        report.push_str(&format!(
            "{:<6} {:<8} {:>6}  {}\n",
            "Game", "Engine1", "Plies", "Outcome"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let color = if game.engine1_white { "W" } else { "B" };
            report.push_str(&format!(
                "{:<6} {:<8} {:>6}  {}\n",
                i + 1,
                color,
                game.plies,
                game.outcome
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}
