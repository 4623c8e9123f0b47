//! Match runner for playing games between engines

use chess_core::{Color, Engine, GameSession, TurnOutcome};
use tracing::{debug, info};

use crate::results::{GameEntry, GameOutcome, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies after which an undecided game is abandoned
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log a line per finished game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the tally from engine1's perspective along with one entry per game.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> (MatchResult, Vec<GameEntry>) {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (outcome, plies) = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };

            let engine1_color = if engine1_white {
                Color::White
            } else {
                Color::Black
            };
            let game_result = outcome.result_for(engine1_color);
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1_white,
                    outcome = %outcome,
                    plies,
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }

            games.push(GameEntry {
                engine1_white,
                outcome,
                plies,
            });
        }

        (result, games)
    }

    /// Play a single game from the start, returns how it ended and after how many plies
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> (GameOutcome, u32) {
        let mut session = GameSession::new();
        white.new_game();
        black.new_game();

        for ply in 0..self.config.max_plies {
            let turn = if session.side_to_move() == Color::White {
                session.play_engine(white)
            } else {
                session.play_engine(black)
            };

            match turn {
                TurnOutcome::Moved { mv, captured } => {
                    debug!(ply, %mv, ?captured, "move");
                }
                TurnOutcome::NoMoves { side } => {
                    return (GameOutcome::NoMoves { side: side.into() }, ply);
                }
            }
        }

        // A side may be left without moves by the very last ply.
        if session.is_game_over() {
            let side = session.side_to_move().into();
            return (GameOutcome::NoMoves { side }, self.config.max_plies);
        }
        (GameOutcome::PlyLimit, self.config.max_plies)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    max_plies: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_plies,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).0
}
