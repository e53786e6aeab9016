//! Blockfall runner (default binary).
//!
//! `play` (the default) runs the game in the terminal: crossterm for input, a
//! framebuffer renderer for output, and a drop clock that ticks the session.
//! `simulate` drives a session from a step script and prints the final
//! snapshot as JSON.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::event::{self, Event};
use log::{info, warn};

use blockfall::clock::DropClock;
use blockfall::core::{Session, SessionConfig, Snapshot};
use blockfall::input::{map_key, should_quit};
use blockfall::script;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{
    PieceKind, DEFAULT_COLS, DEFAULT_DROP_INTERVAL_MS, DEFAULT_POINTS_PER_LINE, DEFAULT_ROWS,
};

#[derive(Debug, Parser)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle game in the terminal")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,
    /// Run a step script headlessly and print the final snapshot as JSON
    Simulate {
        /// Steps: t=tick l=left r=right d=soft drop c/x=rotate cw/ccw
        #[arg(long)]
        moves: String,
        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Debug, Args)]
struct GameArgs {
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Gravity interval in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_DROP_INTERVAL_MS)]
    interval_ms: u32,
    #[arg(long, global = true, default_value_t = DEFAULT_POINTS_PER_LINE)]
    points_per_line: u32,
    /// Piece selection seed (defaults to the current time)
    #[arg(long, global = true)]
    seed: Option<u32>,
    /// Square pieces only
    #[arg(long, global = true, default_value_t = false, conflicts_with = "pieces")]
    classic: bool,
    /// Comma-separated piece set, e.g. `i,o,t` (defaults to all seven)
    #[arg(long, global = true, value_delimiter = ',', value_parser = parse_piece)]
    pieces: Vec<PieceKind>,
}

fn parse_piece(s: &str) -> Result<PieceKind, String> {
    PieceKind::from_str(s.trim()).ok_or_else(|| {
        let known: Vec<&str> = PieceKind::ALL.iter().map(PieceKind::as_str).collect();
        format!("unknown piece {s:?}, expected one of {}", known.join(","))
    })
}

impl GameArgs {
    fn config(&self) -> SessionConfig {
        let seed = self.seed.unwrap_or_else(time_seed);
        let config = SessionConfig::new(self.rows, self.cols)
            .with_drop_interval_ms(self.interval_ms)
            .with_points_per_line(self.points_per_line)
            .with_seed(seed);
        if self.classic {
            config.with_piece_set(&[PieceKind::O])
        } else if !self.pieces.is_empty() {
            config.with_piece_set(&self.pieces)
        } else {
            config
        }
    }
}

fn time_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let session = Session::new(cli.game.config()).context("invalid game configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(session),
        Command::Simulate { moves, pretty } => simulate(session, &moves, pretty),
    }
}

fn simulate(mut session: Session, moves: &str, pretty: bool) -> Result<()> {
    let steps = script::parse(moves)?;
    let outcomes = script::run(&mut session, &steps);
    info!(
        "simulated {} step(s), phase {}",
        outcomes.len(),
        session.phase().as_str()
    );

    let snap = session.snapshot();
    let json = if pretty {
        serde_json::to_string_pretty(&snap)?
    } else {
        serde_json::to_string(&snap)?
    };
    println!("{json}");
    Ok(())
}

fn play(session: Session) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err}");
    }

    let final_score = result?;
    println!("Final score: {final_score}");
    Ok(())
}

/// Interactive loop; returns the score when the player quits.
fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<u32> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = Snapshot::default();
    let mut clock = DropClock::new(session.drop_interval(), Instant::now());
    let mut announced = false;

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if session.is_game_over() && !announced {
            announced = true;
            info!("game over, final score {}", session.score());
        }

        // Input with timeout until the next tick. Once the game is over the
        // clock is irrelevant; just wait for quit or resize.
        let timeout = if session.is_game_over() {
            std::time::Duration::from_millis(250)
        } else {
            clock.time_until_due(Instant::now())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(session.score());
                    }
                    if let Some(input) = map_key(key) {
                        session.handle_input(input);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if session.phase().is_running() && clock.poll(Instant::now()) {
            session.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_flag_sets_the_piece_set() {
        let cli = Cli::try_parse_from(["blockfall", "--pieces", "I,o", "--seed", "3"]).unwrap();
        let config = cli.game.config();
        assert_eq!(config.piece_set, vec![PieceKind::I, PieceKind::O]);
        assert_eq!(config.seed, 3);
    }

    #[test]
    fn classic_selects_squares_only() {
        let cli = Cli::try_parse_from(["blockfall", "--classic", "simulate", "--moves", "t"])
            .unwrap();
        assert_eq!(cli.game.config().piece_set, vec![PieceKind::O]);
        assert!(matches!(cli.command, Some(Command::Simulate { .. })));
    }

    #[test]
    fn unknown_piece_is_rejected() {
        let err = Cli::try_parse_from(["blockfall", "--pieces", "o,q"]).unwrap_err();
        assert!(err.to_string().contains("unknown piece"));
    }

    #[test]
    fn classic_conflicts_with_pieces() {
        assert!(Cli::try_parse_from(["blockfall", "--classic", "--pieces", "t"]).is_err());
    }
}
