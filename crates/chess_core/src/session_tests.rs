use super::*;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

/// Plays the first generated move, for driving a session in tests.
struct FirstMove;

impl Engine for FirstMove {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        generate_moves(board, color).first().copied()
    }

    fn name(&self) -> &str {
        "first"
    }
}

#[test]
fn test_new_session() {
    let session = GameSession::new();
    assert_eq!(session.side_to_move(), Color::White);
    assert_eq!(session.board(), &Board::startpos());
    assert!(session.last_move().is_none());
    assert!(!session.is_game_over());
    assert_eq!(session.moves().len(), 20);
}

#[test]
fn test_from_fen_side_to_move() {
    let session = GameSession::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
    assert_eq!(session.side_to_move(), Color::Black);

    let session = GameSession::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
    assert_eq!(session.side_to_move(), Color::White);

    assert!(matches!(
        GameSession::from_fen("4k3/8/8/8/8/8/8/4K3 x"),
        Err(ChessError::InvalidFen(_))
    ));
}

#[test]
fn test_select_own_piece_lists_targets() {
    let mut session = GameSession::new();

    let mut t = session.select(sq("b1"));
    t.sort();
    assert_eq!(t, vec![sq("a3"), sq("c3")]);
    assert_eq!(session.selected(), Some(sq("b1")));

    // Opponent piece or empty square clears the selection
    assert!(session.select(sq("b8")).is_empty());
    assert_eq!(session.selected(), None);
    assert!(session.select(sq("e4")).is_empty());
    assert_eq!(session.selected(), None);
}

#[test]
fn test_play_flips_turn_and_records_last_move() {
    let mut session = GameSession::new();
    assert_eq!(session.play(sq("e2"), sq("e4")), Ok(None));

    assert_eq!(session.side_to_move(), Color::Black);
    assert_eq!(session.last_move(), Some(Move::new(sq("e2"), sq("e4"))));
    assert!(session.board().piece_at(sq("e2")).is_none());

    // White cannot move twice
    assert!(session.play(sq("d2"), sq("d4")).is_err());
    assert_eq!(session.side_to_move(), Color::Black);
}

#[test]
fn test_play_selected() {
    let mut session = GameSession::new();
    assert_eq!(
        session.play_selected(sq("e4")),
        Err(ChessError::NothingSelected)
    );

    session.select(sq("e2"));
    assert_eq!(session.play_selected(sq("e4")), Ok(None));
    assert_eq!(session.selected(), None);
    assert_eq!(session.side_to_move(), Color::Black);
}

#[test]
fn test_play_rejects_unreachable_target() {
    let mut session = GameSession::new();
    let before = session.board().clone();
    assert_eq!(
        session.play(sq("e2"), sq("e5")),
        Err(ChessError::IllegalMove {
            mv: Move::new(sq("e2"), sq("e5"))
        })
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.side_to_move(), Color::White);
}

#[test]
fn test_play_promotes_to_queen() {
    let mut session = GameSession::from_fen("4k3/1P6/8/8/8/8/8/4K3 w").unwrap();
    session.play(sq("b7"), sq("b8")).unwrap();
    assert_eq!(
        session.board().piece_at(sq("b8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn test_game_over_blocks_play() {
    let mut session = GameSession::from_fen("KP5k/PP6/8/8/8/8/8/8 w").unwrap();
    assert!(session.is_game_over());
    assert_eq!(
        session.play(sq("a8"), sq("b8")),
        Err(ChessError::GameOver { side: Color::White })
    );
    assert_eq!(
        session.play_engine(&mut FirstMove),
        TurnOutcome::NoMoves { side: Color::White }
    );
}

#[test]
fn test_play_engine_applies_move() {
    let mut session = GameSession::new();
    session.play(sq("e2"), sq("e4")).unwrap();

    let outcome = session.play_engine(&mut FirstMove);
    match outcome {
        TurnOutcome::Moved { mv, captured } => {
            assert_eq!(captured, None);
            assert_eq!(session.last_move(), Some(mv));
            assert_eq!(mv.from.row, 0);
        }
        TurnOutcome::NoMoves { .. } => panic!("black has moves"),
    }
    assert_eq!(session.side_to_move(), Color::White);
}

#[test]
fn test_restart() {
    let mut session = GameSession::new();
    session.play(sq("g1"), sq("f3")).unwrap();
    session.select(sq("b8"));
    session.restart();

    assert_eq!(session.board(), &Board::startpos());
    assert_eq!(session.side_to_move(), Color::White);
    assert!(session.last_move().is_none());
    assert!(session.selected().is_none());
}
