//! chess_play CLI
//!
//! Play against the engine, run self-play matches and inspect move generation.

mod cli;

use anyhow::{Context, Result};
use chess_core::{perft, Color, GameSession};
use chess_play::{Driver, MatchConfig, MatchRunner, MatchSummary, PlayConfig};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn session_from(fen: Option<&str>) -> Result<GameSession> {
    match fen {
        Some(fen) => {
            GameSession::from_fen(fen).with_context(|| format!("bad position {fen:?}"))
        }
        None => Ok(GameSession::new()),
    }
}

fn run_play(cfg: &PlayConfig, fen: Option<&str>) -> Result<()> {
    let engine = cfg.opponent.build(cfg.seed);
    let mut driver = Driver::with_session(session_from(fen)?, engine, cfg.human_color.into());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    driver.run(stdin.lock(), &mut stdout)
}

fn run_selfplay(
    cfg: &PlayConfig,
    white: chess_play::EngineKind,
    black: chess_play::EngineKind,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut engine1 = white.build(cfg.seed);
    let mut engine2 = black.build(cfg.seed.map(|s| s.wrapping_add(1)));

    let runner = MatchRunner::new(MatchConfig {
        num_games: cfg.games,
        max_plies: cfg.max_plies,
        ..Default::default()
    });

    let start = Instant::now();
    let (result, games) = runner.run_match(engine1.as_mut(), engine2.as_mut());
    info!(elapsed = ?start.elapsed(), "match finished");

    let summary = MatchSummary {
        engine1: engine1.name().to_string(),
        engine2: engine2.name().to_string(),
        seed: cfg.seed,
        max_plies: cfg.max_plies,
        result,
        games,
    };
    println!("{}", summary.generate_report());

    if let Some(path) = output {
        summary.save(path)?;
        info!(path = %path.display(), "summary written");
    }
    Ok(())
}

fn run_moves(fen: Option<&str>) -> Result<()> {
    let session = session_from(fen)?;
    println!("{}", session.board());
    let moves = session.moves();
    println!("{} to move, {} moves:", session.side_to_move(), moves.len());
    for mv in moves {
        println!("  {mv}");
    }
    Ok(())
}

fn run_perft(depth: u8, fen: Option<&str>) -> Result<()> {
    let session = session_from(fen)?;
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(session.board(), session.side_to_move(), d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!("depth {d}: {nodes} nodes in {elapsed:?} ({nps:.0} nps)");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = PlayConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    init_logging(&cfg.log_level);

    match cli.command {
        Command::Play {
            color,
            opponent,
            fen,
        } => {
            if let Some(c) = color {
                cfg.human_color = c;
            }
            if let Some(o) = opponent {
                cfg.opponent = o;
            }
            info!(
                human = %Color::from(cfg.human_color),
                opponent = ?cfg.opponent,
                "starting game"
            );
            run_play(&cfg, fen.as_deref())
        }
        Command::Selfplay {
            white,
            black,
            games,
            max_plies,
            output,
        } => {
            if let Some(g) = games {
                cfg.games = g;
            }
            if let Some(p) = max_plies {
                cfg.max_plies = p;
            }
            run_selfplay(&cfg, white, black, output.as_deref())
        }
        Command::Moves { fen } => run_moves(fen.as_deref()),
        Command::Perft { depth, fen } => run_perft(depth, fen.as_deref()),
    }
}
