use std::fmt;

use crate::error::{ChessError, Result};
use crate::types::*;

/// An 8x8 grid of optional occupants. Row 0 is Black's back rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[0][col] = Some(Piece::new(Color::Black, kind));
            b.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    /// Parses the piece-placement field of a FEN string. Any further fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| ChessError::InvalidFen("empty string".to_string()))?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first, which is row 0 here.
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => {
                            return Err(ChessError::InvalidFen(format!(
                                "unexpected piece character '{ch}'"
                            )));
                        }
                    };
                    if col >= 8 {
                        return Err(ChessError::InvalidFen(format!(
                            "too many files in rank {}",
                            8 - row
                        )));
                    }
                    board.squares[row][col] = Some(Piece::new(color, kind));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} covers {col} files",
                    8 - row
                )));
            }
        }

        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = pc;
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Relocates the piece on `mv.from` to `mv.to` and returns whatever stood there.
    ///
    /// The move must have been generated for this exact board. Nothing is
    /// validated at runtime; a stale or invented move silently corrupts the
    /// position. Use [`crate::try_apply_move`] when that guarantee is not held.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let moved = self.piece_at(mv.from);
        debug_assert!(
            moved.is_some(),
            "apply_move from empty square {}",
            mv.from
        );
        let captured = self.piece_at(mv.to);

        self.set_piece(mv.to, moved);
        self.set_piece(mv.from, None);

        if let Some(pc) = moved
            && pc.kind == PieceKind::Pawn
            && let Some(promo) = mv.promo
        {
            self.set_piece(mv.to, Some(Piece::new(pc.color, promo)));
        }

        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for occupant in squares {
                let ch = occupant.map_or('\u{b7}', Piece::glyph);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
