//! Properties of generation and application that must hold on any board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use chess_core::{Board, Color, Move, Piece, PieceKind, Square, generate_moves, moves_for_square};

/// Positions reached by random play from the start, for sweeping properties.
fn random_positions(seed: u64, plies: usize) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::startpos();
    let mut color = Color::White;
    let mut out = vec![(board.clone(), color)];
    for _ in 0..plies {
        let moves = generate_moves(&board, color);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.apply_move(mv);
        color = color.other();
        out.push((board.clone(), color));
    }
    out
}

fn expected_after(board: &Board, mv: Move) -> Option<Piece> {
    let moved = board.piece_at(mv.from)?;
    match mv.promo {
        Some(kind) if moved.kind == PieceKind::Pawn => Some(Piece::new(moved.color, kind)),
        _ => Some(moved),
    }
}

#[test]
fn apply_move_relocates_and_reports_capture() {
    for seed in 0..8 {
        for (board, color) in random_positions(seed, 120) {
            for mv in generate_moves(&board, color) {
                let mut copy = board.clone();
                let before_count = copy.pieces().count();
                let captured = copy.apply_move(mv);

                assert_eq!(captured, board.piece_at(mv.to));
                assert!(copy.piece_at(mv.from).is_none());
                assert_eq!(copy.piece_at(mv.to), expected_after(&board, mv));

                let after_count = copy.pieces().count();
                let removed = usize::from(captured.is_some());
                assert_eq!(after_count, before_count - removed);
            }
        }
    }
}

#[test]
fn generated_moves_belong_to_mover_and_stay_on_board() {
    for seed in 0..8 {
        for (board, color) in random_positions(seed, 120) {
            for mv in generate_moves(&board, color) {
                let pc = board.piece_at(mv.from).expect("origin occupied");
                assert_eq!(pc.color, color);
                assert_ne!(mv.from, mv.to);
                // never onto a friendly piece
                assert!(board.piece_at(mv.to).is_none_or(|t| t.color != color));
                assert!(moves_for_square(&board, mv.from).contains(&mv));

                let mut copy = board.clone();
                copy.apply_move(mv);
                for (sq, _) in copy.pieces() {
                    assert!(sq.row < 8 && sq.col < 8);
                }
            }
        }
    }
}

#[test]
fn promotion_only_on_back_ranks() {
    for seed in 0..8 {
        for (board, color) in random_positions(seed, 200) {
            for mv in generate_moves(&board, color) {
                let is_pawn = board.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn);
                let on_back_rank = mv.to.row == 0 || mv.to.row == 7;
                if is_pawn && on_back_rank {
                    assert_eq!(mv.promo, Some(PieceKind::Queen));
                } else {
                    assert_eq!(mv.promo, None);
                }
            }
        }
    }
}

#[test]
fn sliders_never_jump() {
    for seed in 0..8 {
        for (board, color) in random_positions(seed, 120) {
            for mv in generate_moves(&board, color) {
                let kind = board.piece_at(mv.from).map(|p| p.kind);
                if !matches!(
                    kind,
                    Some(PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
                ) {
                    continue;
                }
                let dr = (mv.to.row as i8 - mv.from.row as i8).signum();
                let dc = (mv.to.col as i8 - mv.from.col as i8).signum();
                let mut cur = mv.from.offset(dr, dc).expect("step stays on board");
                while cur != mv.to {
                    assert!(
                        board.piece_at(cur).is_none(),
                        "{mv} passes over occupied {cur}"
                    );
                    cur = cur.offset(dr, dc).expect("step stays on board");
                }
            }
        }
    }
}

#[test]
fn start_position_is_mirror_symmetric() {
    let board = Board::startpos();
    let mirror = |sq: Square| Square::new(7 - sq.row, sq.col);

    let mut white: Vec<(Square, Square)> = generate_moves(&board, Color::White)
        .into_iter()
        .map(|m| (mirror(m.from), mirror(m.to)))
        .collect();
    let mut black: Vec<(Square, Square)> = generate_moves(&board, Color::Black)
        .into_iter()
        .map(|m| (m.from, m.to))
        .collect();
    white.sort();
    black.sort();
    assert_eq!(white, black);
}
