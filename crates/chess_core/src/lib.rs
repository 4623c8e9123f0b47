pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod session;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use session::*;
pub use types::*;

#[cfg(test)]
mod session_tests;

// =============================================================================
// Engine trait — implemented by every automated opponent
// =============================================================================

/// Trait that all move-selection policies implement.
///
/// The session hands an engine the board and the side it plays; the engine
/// answers with one of that side's generated moves, or `None` when the side
/// has nothing to play.
pub trait Engine: Send {
    /// Pick a move for `color` on `board`.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
