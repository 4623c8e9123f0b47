use chess_play::{EngineKind, Side};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chess_play",
    version,
    about = "Play and inspect the pseudo-legal chess core"
)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the engines' random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play against an engine on the terminal
    Play {
        /// Side you play
        #[arg(long, value_enum)]
        color: Option<Side>,
        /// Engine you play against
        #[arg(long, value_enum)]
        opponent: Option<EngineKind>,
        /// Start from this position instead of the initial one
        #[arg(long)]
        fen: Option<String>,
    },
    /// Engine vs engine games
    Selfplay {
        #[arg(long, value_enum, default_value = "greedy")]
        white: EngineKind,
        #[arg(long, value_enum, default_value = "random")]
        black: EngineKind,
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        max_plies: Option<u32>,
        /// Write a JSON summary here
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the moves of the side to move
    Moves {
        /// FEN piece placement, optionally followed by `w` or `b`
        #[arg(long)]
        fen: Option<String>,
    },
    /// Count positions reachable in `depth` plies
    Perft {
        depth: u8,
        #[arg(long)]
        fen: Option<String>,
    },
}
