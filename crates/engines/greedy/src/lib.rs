//! Move selection policies for the automated opponent
//!
//! - [`GreedyEngine`] takes the most valuable capture on offer, breaking ties
//!   at random, and plays any move at random when nothing can be captured.
//! - [`RandomEngine`] picks uniformly among all moves. Useful as a baseline
//!   and for stress testing move generation.
//!
//! Both own their random source so that a fixed seed replays the same game.

use chess_core::{generate_moves, piece_value, Board, Color, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

mod random;

pub use random::RandomEngine;


/// One-ply greedy choice for `color`.
///
/// Returns `None` when `color` has no moves. Otherwise, among moves whose
/// destination is occupied, keeps those capturing the highest-valued piece
/// and returns one of them at random; without any capture, returns any
/// generated move at random. Resulting positions are never evaluated.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves = generate_moves(board, color);
    if moves.is_empty() {
        return None;
    }

    let mut best_value = -1;
    let mut best_moves: Vec<Move> = Vec::new();
    for &mv in &moves {
        let Some(target) = board.piece_at(mv.to) else {
            continue;
        };
        let v = piece_value(target.kind);
        if v > best_value {
            best_value = v;
            best_moves.clear();
            best_moves.push(mv);
        } else if v == best_value {
            best_moves.push(mv);
        }
    }

    if let Some(&mv) = best_moves.choose(rng) {
        debug!(%mv, value = best_value, ties = best_moves.len(), "greedy capture");
        return Some(mv);
    }

    moves.choose(rng).copied()
}

/// Engine wrapper around [`choose_move`] with its own seedable generator.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine: the same seed and positions give the same moves.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        choose_move(board, color, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
