use crate::{
    board::Board,
    error::{ChessError, Result},
    movegen::moves_for_square,
    types::*,
};

/// Renders a move as origin and destination coordinates, e.g. `e2e4` or `b7b8q`.
pub fn move_to_text(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&mv.from.to_coord());
    s.push_str(&mv.to.to_coord());
    // promotion is always to a queen
    if mv.promo.is_some() {
        s.push('q');
    }
    s
}

/// Resolves `txt` against the moves generated for the piece on its origin square.
///
/// Only origin and destination are matched. A `q` suffix is optional on a
/// promoting move and rejected on any other.
pub fn parse_move(board: &Board, color: Color, txt: &str) -> Result<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }
    let from = Square::from_coord(&txt[0..2])?;
    let to = Square::from_coord(&txt[2..4])?;
    let suffixed = txt.len() == 5;
    if suffixed && !txt[4..].eq_ignore_ascii_case("q") {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }

    let mv = find_move(board, color, from, to)?;
    if suffixed && mv.promo.is_none() {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }
    Ok(mv)
}

/// Looks up the generated move of `color`'s piece on `from` that lands on `to`.
pub fn find_move(board: &Board, color: Color, from: Square, to: Square) -> Result<Move> {
    match board.piece_at(from) {
        None => Err(ChessError::EmptySquare { square: from }),
        Some(pc) if pc.color != color => Err(ChessError::IllegalMove {
            mv: Move::new(from, to),
        }),
        Some(_) => moves_for_square(board, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(ChessError::IllegalMove {
                mv: Move::new(from, to),
            }),
    }
}
