use crate::{
    board::Board,
    movegen::generate_moves_into,
    types::{Color, Move},
};

/// Pseudo-legal perft node count.
/// Counts every position reachable from `board` with `color` to move in exactly `depth` plies.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        generate_moves_into(board, color, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.clone();
            child.apply_move(mv);
            nodes += inner(&child, color.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, color, depth, &mut layers[..])
}
