//! Game state owned by whoever drives the game: board, side to move and the
//! last move played.

use crate::{
    Engine,
    board::Board,
    error::{ChessError, Result},
    movegen::{generate_moves, has_moves, moves_for_square},
    notation::find_move,
    types::*,
};

/// What happened when a side was asked to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved {
        mv: Move,
        captured: Option<Piece>,
    },
    /// The side to move had nothing to play; the game is over.
    NoMoves { side: Color },
}

#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    last_move: Option<Move>,
    selected: Option<Square>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            side_to_move: Color::White,
            last_move: None,
            selected: None,
        }
    }

    /// Builds a session from FEN piece placement plus an optional side-to-move
    /// field (`w` or `b`, White when absent).
    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = Board::from_fen(fen)?;
        let side_to_move = match fen.split_whitespace().nth(1) {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(ChessError::InvalidFen(format!(
                    "unexpected side to move '{other}'"
                )));
            }
        };
        Ok(Self {
            board,
            side_to_move,
            last_move: None,
            selected: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Back to the starting arrangement with White to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn is_game_over(&self) -> bool {
        !has_moves(&self.board, self.side_to_move)
    }

    /// All moves available to the side to move.
    pub fn moves(&self) -> Vec<Move> {
        generate_moves(&self.board, self.side_to_move)
    }

    /// Selects `sq` if it holds a piece of the side to move and returns the
    /// squares that piece can reach. Any other square clears the selection.
    pub fn select(&mut self, sq: Square) -> Vec<Square> {
        match self.board.piece_at(sq) {
            Some(pc) if pc.color == self.side_to_move => {
                self.selected = Some(sq);
                moves_for_square(&self.board, sq)
                    .into_iter()
                    .map(|mv| mv.to)
                    .collect()
            }
            _ => {
                self.selected = None;
                Vec::new()
            }
        }
    }

    /// Plays the move of the piece on `from` that lands on `to`, for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>> {
        if self.is_game_over() {
            return Err(ChessError::GameOver {
                side: self.side_to_move,
            });
        }
        let mv = find_move(&self.board, self.side_to_move, from, to)?;
        Ok(self.apply(mv))
    }

    /// Plays from the currently selected square to `to`.
    pub fn play_selected(&mut self, to: Square) -> Result<Option<Piece>> {
        let from = self.selected.ok_or(ChessError::NothingSelected)?;
        self.play(from, to)
    }

    /// Applies a move generated for the current board and passes the turn.
    ///
    /// Like [`Board::apply_move`] this trusts the caller.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let captured = self.board.apply_move(mv);
        self.last_move = Some(mv);
        self.selected = None;
        self.side_to_move = self.side_to_move.other();
        captured
    }

    /// Lets `engine` play for the side to move.
    pub fn play_engine(&mut self, engine: &mut dyn Engine) -> TurnOutcome {
        let side = self.side_to_move;
        match engine.choose_move(&self.board, side) {
            Some(mv) => {
                let captured = self.apply(mv);
                TurnOutcome::Moved { mv, captured }
            }
            None => TurnOutcome::NoMoves { side },
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
