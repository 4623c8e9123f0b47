use super::*;
use chess_core::{Board, Color, Engine, Move};
use greedy_engine::{GreedyEngine, RandomEngine};

/// Never has anything to play.
struct Resigner;

impl Engine for Resigner {
    fn choose_move(&mut self, _board: &Board, _color: Color) -> Option<Move> {
        None
    }

    fn name(&self) -> &str {
        "resigner"
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = GreedyEngine::with_seed(1);
    let mut engine2 = GreedyEngine::with_seed(2);

    let config = MatchConfig {
        num_games: 2,
        max_plies: 50,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let (result, games) = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
    assert_eq!(games.len(), 2);
    assert!(games[0].engine1_white);
    assert!(!games[1].engine1_white);
    assert!(games.iter().all(|g| g.plies <= 50));
}

#[test]
fn test_engine_without_moves_loses() {
    let mut greedy = GreedyEngine::with_seed(0);
    let mut resigner = Resigner;

    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    });
    let (result, games) = runner.run_match(&mut greedy, &mut resigner);

    assert_eq!(
        result,
        MatchResult {
            wins: 2,
            losses: 0,
            draws: 0
        }
    );
    // Resigner plays Black in game 1 and answers after one ply
    assert_eq!(games[0].outcome, GameOutcome::NoMoves { side: Side::Black });
    assert_eq!(games[0].plies, 1);
    // and White in game 2, stuck immediately
    assert_eq!(games[1].outcome, GameOutcome::NoMoves { side: Side::White });
    assert_eq!(games[1].plies, 0);
}

#[test]
fn test_ply_limit_is_a_draw() {
    let mut a = RandomEngine::with_seed(5);
    let mut b = RandomEngine::with_seed(6);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        max_plies: 4,
        verbose: false,
        ..Default::default()
    });

    // Nobody runs out of moves within four plies from the start
    let (outcome, plies) = runner.play_game(&mut a, &mut b);
    assert_eq!(outcome, GameOutcome::PlyLimit);
    assert_eq!(plies, 4);
    assert_eq!(outcome.result_for(Color::White), GameResult::Draw);
}

#[test]
fn test_play_game_with_boxed_engines() {
    // Engines built from config come as separately owned boxes
    let mut white: Box<dyn Engine> = Box::new(GreedyEngine::with_seed(3));
    let mut black: Box<dyn Engine> = Box::new(Resigner);
    let runner = MatchRunner::new(MatchConfig {
        verbose: false,
        ..Default::default()
    });

    let (outcome, plies) = runner.play_game(white.as_mut(), black.as_mut());
    assert_eq!(outcome, GameOutcome::NoMoves { side: Side::Black });
    assert_eq!(plies, 1);

    let (outcome, plies) = runner.play_game(black.as_mut(), white.as_mut());
    assert_eq!(outcome, GameOutcome::NoMoves { side: Side::White });
    assert_eq!(plies, 0);
}

#[test]
fn test_seeded_match_is_reproducible() {
    let run = || {
        let mut a = GreedyEngine::with_seed(10);
        let mut b = RandomEngine::with_seed(11);
        let runner = MatchRunner::new(MatchConfig {
            num_games: 3,
            max_plies: 120,
            verbose: false,
            ..Default::default()
        });
        runner.run_match(&mut a, &mut b)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_quick_match_counts_games() {
    let mut a = RandomEngine::with_seed(1);
    let mut b = RandomEngine::with_seed(2);
    let result = quick_match(&mut a, &mut b, 3, 30);
    assert_eq!(result.total_games(), 3);
}

#[test]
fn test_score() {
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 2,
    };
    assert!((result.score() - 4.0 / 6.0).abs() < 1e-9);
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_summary_round_trips_through_json() {
    let summary = MatchSummary {
        engine1: "Greedy v1.0".to_string(),
        engine2: "Random v1.0".to_string(),
        seed: Some(7),
        max_plies: 80,
        result: MatchResult {
            wins: 1,
            losses: 0,
            draws: 1,
        },
        games: vec![
            GameEntry {
                engine1_white: true,
                outcome: GameOutcome::NoMoves { side: Side::Black },
                plies: 41,
            },
            GameEntry {
                engine1_white: false,
                outcome: GameOutcome::PlyLimit,
                plies: 80,
            },
        ],
    };

    let path = std::env::temp_dir()
        .join(format!("chess_play_summary_{}.json", std::process::id()));
    summary.save(&path).unwrap();
    let loaded = MatchSummary::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.result, summary.result);
    assert_eq!(loaded.games, summary.games);

    let report = summary.generate_report();
    assert!(report.contains("Black has no moves"));
    assert!(report.contains("ply limit"));
}
