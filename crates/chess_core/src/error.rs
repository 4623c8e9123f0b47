use thiserror::Error;

use crate::types::{Color, Move, Square};

/// Errors reported by the checked entry points of the core.
///
/// The unchecked fast path (`Board::apply_move`) never returns these; it trusts
/// its caller to pass a move generated for the exact board it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("move {mv} is not available on this board")]
    IllegalMove { mv: Move },

    #[error("no piece on {square}")]
    EmptySquare { square: Square },

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("cannot read move from {0:?}")]
    InvalidMoveText(String),

    #[error("no square selected")]
    NothingSelected,

    #[error("game is over: {side} has no moves")]
    GameOver { side: Color },
}

pub type Result<T> = std::result::Result<T, ChessError>;
