//! Human vs engine on a line-based terminal

use anyhow::Result;
use chess_core::{material_balance, parse_move, Color, Engine, GameSession, Square, TurnOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub const HELP: &str = "\
Commands:
  e2e4      play a move (origin and destination)
  e2        select a piece and list its targets; a second square plays to it
  moves     list all moves for the side to move
  board     print the board
  restart   start a new game
  quit      leave";

/// Owns the session and the engine playing against the human.
pub struct Driver {
    session: GameSession,
    engine: Box<dyn Engine>,
    human: Color,
}

impl Driver {
    pub fn new(engine: Box<dyn Engine>, human: Color) -> Self {
        Self::with_session(GameSession::new(), engine, human)
    }

    /// Continues an existing game, e.g. one set up from FEN.
    pub fn with_session(session: GameSession, engine: Box<dyn Engine>, human: Color) -> Self {
        Self {
            session,
            engine,
            human,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{HELP}")?;
        self.begin(out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out)? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Fresh game; the engine opens when the human plays Black.
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.session.restart();
        self.begin(out)
    }

    /// Plays from the current position, letting the engine move first if it is
    /// its turn.
    fn begin<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.engine.new_game();
        info!(human = %self.human, engine = self.engine.name(), "new game");
        if self.session.side_to_move() != self.human && !self.session.is_game_over() {
            self.engine_turn(out)?;
        }
        self.show(out)
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Control> {
        let cmd = line.trim();
        match cmd {
            "" => {}
            "quit" | "exit" => return Ok(Control::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "board" => self.show(out)?,
            "restart" => self.start(out)?,
            "moves" => {
                let moves = self.session.moves();
                let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                writeln!(out, "{} moves: {}", list.len(), list.join(" "))?;
            }
            _ if self.session.is_game_over() => {
                writeln!(out, "Game over. Type 'restart' or 'quit'.")?;
            }
            _ if cmd.len() == 2 => self.square_input(cmd, out)?,
            _ => self.move_input(cmd, out)?,
        }
        Ok(Control::Continue)
    }

    /// Two-step input: the first square selects, a second square that the
    /// selected piece can reach plays the move. Any other square re-selects.
    fn square_input<W: Write>(&mut self, cmd: &str, out: &mut W) -> Result<()> {
        let sq = match Square::from_coord(cmd) {
            Ok(sq) => sq,
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
        };

        if self.session.selected().is_some() && self.session.play_selected(sq).is_ok() {
            return self.after_human_move(out);
        }

        let targets = self.session.select(sq);
        match self.session.selected() {
            Some(from) => {
                let list: Vec<String> = targets.iter().map(|s| s.to_coord()).collect();
                writeln!(out, "{from} -> {}", list.join(" "))?;
            }
            None => writeln!(out, "No {} piece on {sq}", self.human)?,
        }
        Ok(())
    }

    fn move_input<W: Write>(&mut self, cmd: &str, out: &mut W) -> Result<()> {
        let color = self.session.side_to_move();
        match parse_move(self.session.board(), color, cmd) {
            Ok(mv) => {
                self.session.apply(mv);
                self.after_human_move(out)
            }
            Err(e) => {
                debug!(input = cmd, error = %e, "rejected input");
                writeln!(out, "{e}")?;
                Ok(())
            }
        }
    }

    fn after_human_move<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(mv) = self.session.last_move() {
            info!(%mv, "human move");
        }
        if !self.session.is_game_over() {
            self.engine_turn(out)?;
        }
        self.show(out)
    }

    fn engine_turn<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.session.play_engine(self.engine.as_mut()) {
            TurnOutcome::Moved { mv, captured } => {
                info!(%mv, ?captured, engine = self.engine.name(), "engine move");
                writeln!(out, "{} plays {mv}", self.engine.name())?;
            }
            TurnOutcome::NoMoves { side } => {
                warn!(%side, "engine has no moves");
            }
        }
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.session.board())?;
        let side = self.session.side_to_move();
        if self.session.is_game_over() {
            writeln!(
                out,
                "Game over: {side} has no moves. Type 'restart' or 'quit'."
            )?;
        } else {
            writeln!(
                out,
                "{side} to move (material {:+})",
                material_balance(self.session.board(), self.human)
            )?;
        }
        Ok(())
    }
}
