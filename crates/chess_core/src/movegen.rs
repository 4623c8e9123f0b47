use crate::{
    board::Board,
    error::{ChessError, Result},
    types::*,
};

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate all pseudo-legal moves for `color`, returning a freshly allocated vector.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_moves_into(board, color, &mut out);
    out
}

/// Generate all pseudo-legal moves for `color` into the provided buffer, reusing it across calls.
///
/// Squares are scanned in row-major order. Moves that leave the mover's own
/// king attacked are included; nothing here knows about check.
pub fn generate_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for (sq, pc) in board.pieces() {
        if pc.color != color {
            continue;
        }
        piece_moves(board, sq, pc, out);
    }
}

/// Moves of whatever piece stands on `sq`. An empty square has none.
pub fn moves_for_square(board: &Board, sq: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = board.piece_at(sq) {
        piece_moves(board, sq, pc, &mut out);
    }
    out
}

/// True when `color` has at least one move; the game ends when this is false
/// for the side to move.
pub fn has_moves(board: &Board, color: Color) -> bool {
    let mut buf = Vec::with_capacity(32);
    board
        .pieces()
        .filter(|(_, pc)| pc.color == color)
        .any(|(sq, pc)| {
            buf.clear();
            piece_moves(board, sq, pc, &mut buf);
            !buf.is_empty()
        })
}

/// Checked counterpart of [`Board::apply_move`]: the move is applied only if
/// it is among the moves currently generated for the piece on its origin.
pub fn try_apply_move(board: &mut Board, mv: Move) -> Result<Option<Piece>> {
    if board.piece_at(mv.from).is_none() {
        return Err(ChessError::EmptySquare { square: mv.from });
    }
    if !moves_for_square(board, mv.from).contains(&mv) {
        return Err(ChessError::IllegalMove { mv });
    }
    Ok(board.apply_move(mv))
}

fn piece_moves(board: &Board, sq: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, sq, pc.color, out),
        PieceKind::Knight => gen_leaper(board, sq, pc.color, out, &KNIGHT_JUMPS),
        PieceKind::Bishop => gen_slider(board, sq, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, sq, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => gen_slider(board, sq, pc.color, out, &ALL_DIRECTIONS),
        PieceKind::King => gen_leaper(board, sq, pc.color, out, &ALL_DIRECTIONS),
    }
}

fn pawn_move(from: Square, to: Square) -> Move {
    let mut mv = Move::new(from, to);
    if to.row == 0 || to.row == 7 {
        mv.promo = Some(PieceKind::Queen);
    }
    mv
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1, and forward 2 only through an empty square
    if let Some(one) = from.offset(dir, 0)
        && is_empty(board.piece_at(one))
    {
        out.push(pawn_move(from, one));

        if from.row == c.pawn_home_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && is_empty(board.piece_at(two))
        {
            out.push(Move::new(from, two));
        }
    }

    // diagonal captures only
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && is_enemy(board.piece_at(to), c)
        {
            out.push(pawn_move(from, to));
        }
    }
}

/// Single-step pieces: knight jumps and king steps.
fn gen_leaper(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            let target = board.piece_at(to);
            if is_empty(target) || is_enemy(target, c) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}
