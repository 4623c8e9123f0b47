use crate::{board::Board, types::*};

/// Fixed material value of a piece kind, in centipawns.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 10000,
    }
}

/// Material of `color` minus that of its opponent. Kings are left out since
/// both sides normally have exactly one.
pub fn material_balance(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .filter(|(_, pc)| pc.kind != PieceKind::King)
        .map(|(_, pc)| {
            let v = piece_value(pc.kind);
            if pc.color == color { v } else { -v }
        })
        .sum()
}
